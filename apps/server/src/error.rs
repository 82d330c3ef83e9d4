use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use hearth_core::errors::{DatabaseError, Error};

/// Wrapper turning domain errors into HTTP responses.
pub struct ApiError(Error);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(Error::Unexpected(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Error::Database(DatabaseError::NotFound(e)) => (StatusCode::NOT_FOUND, e.to_string()),
            Error::Database(DatabaseError::UniqueViolation(e)) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            Error::Database(DatabaseError::ForeignKeyViolation(e)) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
