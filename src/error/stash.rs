use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum StashError {
    #[error("Snippet {0} not found")]
    SnippetNotFound(i64),

    #[error("Invalid snippet id: {0}")]
    InvalidSnippetId(String),

    #[error("Snippet store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StashError {
    pub fn status(&self) -> StatusCode {
        match self {
            StashError::SnippetNotFound(_) => StatusCode::NOT_FOUND,
            StashError::InvalidSnippetId(_) => StatusCode::BAD_REQUEST,
            StashError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StashError::DatabaseError(_) | StashError::Config(_) | StashError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for StashError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self {
            StashError::SnippetNotFound(id) => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: "Snippet not found.".to_string(),
                details: Some(serde_json::json!({ "id": id })),
            },
            StashError::InvalidSnippetId(raw) => ApiErrorObject {
                code: "INVALID_ID".to_string(),
                message: "Snippet id must be an integer.".to_string(),
                details: Some(Value::String(raw.clone())),
            },
            StashError::StoreUnavailable(e) => {
                error!(error = %e, "Snippet store unreachable");
                ApiErrorObject {
                    code: "STORE_UNAVAILABLE".to_string(),
                    message: "Failed to connect to the snippet store.".to_string(),
                    details: None,
                }
            }
            StashError::DatabaseError(e) => {
                error!(error = %e, "Snippet store query failed");
                ApiErrorObject {
                    code: "DATABASE_ERROR".to_string(),
                    message: "Failed to read from the snippet store.".to_string(),
                    details: None,
                }
            }
            StashError::Config(_) | StashError::IoError(_) => ApiErrorObject {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred.".to_string(),
                details: None,
            },
        };
        (status, Json(ApiErrorBody { inner: body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_validation_failures_are_distinct() {
        assert_eq!(
            StashError::SnippetNotFound(7).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StashError::InvalidSnippetId("abc".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn io_failures_convert_into_internal_errors() {
        let err: StashError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert!(matches!(err, StashError::IoError(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_failures_map_to_server_errors() {
        assert_eq!(
            StashError::StoreUnavailable(sqlx::Error::PoolClosed).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            StashError::DatabaseError(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
