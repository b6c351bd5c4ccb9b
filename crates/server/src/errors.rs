use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlsage::SageError;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from `sqlsage`.
    Sage(SageError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<SageError> for AppError {
    fn from(err: SageError) -> Self {
        AppError::Sage(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// The HTTP status a library error is reported with.
pub fn status_for(err: &SageError) -> StatusCode {
    match err {
        SageError::InvalidInput(_)
        | SageError::NonSelectQuery
        | SageError::Setup(_)
        | SageError::Statement { .. }
        | SageError::NotRowReturning(_)
        | SageError::UnconfiguredSource(_) => StatusCode::BAD_REQUEST,
        SageError::AiRequest(_)
        | SageError::AiDeserialization(_)
        | SageError::AiApi(_)
        | SageError::SourceRequest(_) => StatusCode::BAD_GATEWAY,
        SageError::ReviewParse { .. }
        | SageError::StoreConnection(_)
        | SageError::StoreOperation(_)
        | SageError::ReqwestClientBuild(_)
        | SageError::JsonSerialization(_)
        | SageError::Regex(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Sage(err) => {
                let status = status_for(&err);
                if status.is_server_error() {
                    error!("SageError: {:?}", err);
                } else {
                    warn!("Rejected request: {}", err);
                }
                (status, err.to_string())
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
