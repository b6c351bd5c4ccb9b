//! # Practice Question Handlers
//!
//! Serves the built-in problem catalog and runs read-only queries against a
//! freshly seeded copy of a problem's schema.

use super::AppError;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlsage::practice::{
    execute_question, question_schema, QuestionResult, QuestionSchema, PROBLEMS,
};
use tracing::info;

// --- API Payloads for Practice Handlers ---

#[derive(Deserialize, Debug)]
pub struct ExecuteQuestionRequest {
    #[serde(default)]
    pub query: String,
    pub question_id: u32,
}

#[derive(Deserialize, Debug)]
pub struct QuestionSchemaRequest {
    pub question_id: u32,
}

// --- Practice Handlers ---

/// Handler for `/get-practice-questions`.
pub async fn practice_questions_handler() -> Json<Value> {
    Json(json!({ "questions": PROBLEMS }))
}

/// Handler for `/execute-question`.
pub async fn execute_question_handler(
    Json(payload): Json<ExecuteQuestionRequest>,
) -> Result<Json<QuestionResult>, AppError> {
    info!(
        "Received query for practice question {}.",
        payload.question_id
    );
    let result = execute_question(payload.question_id, &payload.query).await?;
    Ok(Json(result))
}

/// Handler for `/get-question-schema`.
pub async fn question_schema_handler(
    Json(payload): Json<QuestionSchemaRequest>,
) -> Result<Json<QuestionSchema>, AppError> {
    let schema = question_schema(payload.question_id).await?;
    Ok(Json(schema))
}
