#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared setup for the `sqlsage` integration tests.

use dotenvy::dotenv;
use serde_json::{json, Value};
use sqlsage::{ResultSet, StatementOutcome};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Unwraps a row set, failing the test on a mutating outcome.
pub fn expect_rows(outcome: StatementOutcome) -> ResultSet {
    match outcome {
        StatementOutcome::RowSet(set) => set,
        StatementOutcome::Affected(n) => panic!("expected a row set, got {n} affected rows"),
    }
}

/// Builds the expected JSON rows from integer literals.
pub fn int_rows(values: &[&[i64]]) -> Vec<Vec<Value>> {
    values
        .iter()
        .map(|row| row.iter().map(|v| json!(v)).collect())
        .collect()
}
