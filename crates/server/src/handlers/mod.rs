//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `sqlsage-server`.
//! The handlers are split into sub-modules by feature: the SQL sandbox, the AI
//! review endpoints, the practice catalog, and external problem sources.

pub mod general;
pub mod practice;
pub mod review;
pub mod sandbox;
pub mod sources;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use general::*;
pub use practice::*;
pub use review::*;
pub use sandbox::*;
pub use sources::*;

use super::{errors::AppError, state::AppState};
