use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use wardrobe_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Path segment that cannot name any item (not a UUID).
    #[error("clothing item not found: {0}")]
    UnknownItem(String),

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Soft-deleted and never-existing items look the same from outside.
            ServerError::UnknownItem(id) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Clothing item with ID {id} not found"),
            ),
            ServerError::Store(StoreError::NotFound(id))
            | ServerError::Store(StoreError::Rejected { id, .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Clothing item with ID {id} not found"),
            ),
            ServerError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", errors.join("; "))
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
