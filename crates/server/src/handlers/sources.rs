//! # Problem Source Handlers

use super::{AppError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use sqlsage::sources::fetch_problems;

#[derive(Deserialize, Debug)]
pub struct FetchProblemsParams {
    #[serde(default)]
    pub source: String,
}

/// Handler for `/fetch-problems`. The upstream body is returned as is.
pub async fn fetch_problems_handler(
    State(app_state): State<AppState>,
    Query(params): Query<FetchProblemsParams>,
) -> Result<Json<Value>, AppError> {
    let problems = fetch_problems(&app_state.config.problem_sources, &params.source).await?;
    Ok(Json(problems))
}
