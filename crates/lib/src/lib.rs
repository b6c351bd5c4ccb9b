//! # SQL Review Lab
//!
//! This crate provides the building blocks of the SQL review service:
//!
//! - [`sandbox`]: run setup SQL and a sequence of queries against a throwaway
//!   in-memory database and snapshot every resulting table.
//! - [`practice`]: a fixed catalog of practice problems with deterministic seed
//!   data and a read-only query path.
//! - [`review`]: analysis, optimization, and explanation of queries through a
//!   configurable AI provider.

pub mod errors;
pub mod practice;
pub mod prompts;
pub mod providers;
pub mod review;
pub mod sandbox;
pub mod sources;
pub mod types;

pub use errors::SageError;
pub use sandbox::{run_sandbox, Store};
pub use types::{ExecutedStatement, ExecutionResult, ResultSet, StatementKind, StatementOutcome};
