//! # Sandbox Route Handlers
//!
//! Runs user-supplied setup SQL and query sequences against a throwaway store.

use super::AppError;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlsage::{run_sandbox, ExecutionResult, ResultSet, StatementKind};
use std::collections::BTreeMap;
use tracing::info;

// --- API Payloads for Sandbox Handlers ---

#[derive(Deserialize, Debug)]
pub struct ExecuteSqlRequest {
    #[serde(default)]
    pub setup_sql: String,
    #[serde(default)]
    pub queries: Vec<String>,
}

/// The outcome of the last statement plus a snapshot of every table.
#[derive(Serialize, Deserialize, Debug)]
pub struct ExecuteSqlResponse {
    pub last_query_type: Option<StatementKind>,
    pub last_query_text: Option<String>,
    pub result: Option<ResultSet>,
    pub affected_rows: Option<u64>,
    pub tables: BTreeMap<String, ResultSet>,
}

impl From<ExecutionResult> for ExecuteSqlResponse {
    fn from(execution: ExecutionResult) -> Self {
        Self {
            last_query_type: execution.last_kind(),
            last_query_text: execution.last_text().map(str::to_string),
            result: execution.result().cloned(),
            affected_rows: execution.affected_rows(),
            tables: execution.tables,
        }
    }
}

// --- Sandbox Handlers ---

/// Handler for `/execute-sql`.
pub async fn execute_sql_handler(
    Json(payload): Json<ExecuteSqlRequest>,
) -> Result<Json<ExecuteSqlResponse>, AppError> {
    info!(
        "Received sandbox request with {} queries.",
        payload.queries.len()
    );
    let execution = run_sandbox(&payload.setup_sql, &payload.queries).await?;
    Ok(Json(execution.into()))
}
