use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/execute-sql", post(handlers::execute_sql_handler))
        .route("/compile-sql", post(handlers::compile_sql_handler))
        .route("/analyze", post(handlers::analyze_handler))
        .route("/optimize", post(handlers::optimize_handler))
        .route("/explain", post(handlers::explain_handler))
        .route(
            "/get-practice-questions",
            get(handlers::practice_questions_handler),
        )
        .route(
            "/execute-question",
            post(handlers::execute_question_handler),
        )
        .route(
            "/get-question-schema",
            post(handlers::question_schema_handler),
        )
        .route("/fetch-problems", get(handlers::fetch_problems_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
