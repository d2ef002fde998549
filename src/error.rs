use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Preference store API error: {0}")]
    StoreApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("Operation already in progress: {0}")]
    Busy(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal database error")
            }
            AppError::StoreApi(ref e) => {
                tracing::error!("Preference store API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Preference store error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Validation(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Busy(ref e) => {
                tracing::warn!("Rejected re-entrant call: {}", e);
                (StatusCode::CONFLICT, e.as_str())
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
