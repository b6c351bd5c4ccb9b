//! # Review Route Handlers
//!
//! Endpoints that hand a query to the configured AI provider for analysis,
//! optimized rewrites, or an explanation, plus `/compile-sql`, which runs the
//! query in a sandbox before reviewing it.

use super::{AppError, AppState};
use crate::config::{QUERY_ANALYSIS_TASK, QUERY_EXPLANATION_TASK, QUERY_OPTIMIZATION_TASK};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlsage::{
    review::{
        analyze_query, compile_and_review, explain_difference, optimize_query, Analysis,
        AnalyzeRequest, Optimization,
    },
    ResultSet,
};
use std::collections::BTreeMap;
use tracing::info;

// --- API Payloads for Review Handlers ---

fn default_review_dialect() -> String {
    "PostgreSQL".to_string()
}

fn default_compile_dialect() -> String {
    "SQLite".to_string()
}

fn default_schema_info() -> String {
    "No schema provided".to_string()
}

fn empty_analysis() -> Value {
    json!({})
}

#[derive(Deserialize, Debug)]
pub struct AnalyzeQueryRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_review_dialect")]
    pub dialect: String,
    #[serde(default = "default_schema_info")]
    pub schema_info: String,
}

#[derive(Deserialize, Debug)]
pub struct OptimizeQueryRequest {
    #[serde(default)]
    pub query: String,
    /// A previous analysis, passed back verbatim. Any JSON is accepted.
    #[serde(default = "empty_analysis")]
    pub analysis: Value,
}

#[derive(Deserialize, Debug)]
pub struct ExplainQueryRequest {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub optimized: String,
    #[serde(default = "default_review_dialect")]
    pub dialect: String,
}

#[derive(Deserialize, Debug)]
pub struct CompileSqlRequest {
    #[serde(default)]
    pub setup_sql: String,
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_compile_dialect")]
    pub dialect: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompileSqlResponse {
    pub result: Option<ResultSet>,
    pub affected_rows: Option<u64>,
    pub tables: BTreeMap<String, ResultSet>,
    pub analysis: Analysis,
    pub optimized: Option<Optimization>,
}

// --- Review Handlers ---

/// Handler for `/analyze`.
pub async fn analyze_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<AnalyzeQueryRequest>,
) -> Result<Json<Value>, AppError> {
    info!("Received analysis request (dialect: {}).", payload.dialect);
    let task = app_state.review_task(QUERY_ANALYSIS_TASK)?;
    let analysis = analyze_query(
        task,
        AnalyzeRequest {
            query: &payload.query,
            dialect: &payload.dialect,
            schema_info: &payload.schema_info,
        },
    )
    .await?;
    Ok(Json(json!({ "success": true, "analysis": analysis })))
}

/// Handler for `/optimize`.
pub async fn optimize_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<OptimizeQueryRequest>,
) -> Result<Json<Value>, AppError> {
    info!("Received optimization request.");
    let task = app_state.review_task(QUERY_OPTIMIZATION_TASK)?;
    let optimized = optimize_query(task, &payload.query, &payload.analysis).await?;
    Ok(Json(json!({ "success": true, "optimized": optimized })))
}

/// Handler for `/explain`.
pub async fn explain_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ExplainQueryRequest>,
) -> Result<Json<Value>, AppError> {
    info!("Received explanation request (dialect: {}).", payload.dialect);
    let task = app_state.review_task(QUERY_EXPLANATION_TASK)?;
    let explanation = explain_difference(
        task,
        &payload.original,
        &payload.optimized,
        &payload.dialect,
    )
    .await?;
    Ok(Json(json!({ "success": true, "explanation": explanation })))
}

/// Handler for `/compile-sql`.
///
/// SQL errors are reported before the provider is ever contacted.
pub async fn compile_sql_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CompileSqlRequest>,
) -> Result<Json<CompileSqlResponse>, AppError> {
    info!("Received compile request (dialect: {}).", payload.dialect);
    let analysis_task = app_state.review_task(QUERY_ANALYSIS_TASK)?;
    let optimization_task = app_state.review_task(QUERY_OPTIMIZATION_TASK)?;

    let report = compile_and_review(
        &payload.setup_sql,
        &payload.query,
        &payload.dialect,
        analysis_task,
        optimization_task,
    )
    .await?;

    Ok(Json(CompileSqlResponse {
        result: report.execution.result().cloned(),
        affected_rows: report.execution.affected_rows(),
        tables: report.execution.tables,
        analysis: report.analysis,
        optimized: report.optimized,
    }))
}
