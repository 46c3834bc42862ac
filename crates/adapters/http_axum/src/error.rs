//! HTTP error response mapping for the JSON API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tickets_domain::error::TicketsError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TicketsError`] to a JSON response with appropriate status code.
///
/// The API only reads, so a validation failure comes from a malformed stored
/// row and is reported as a server error.
#[derive(Debug)]
pub struct ApiError(TicketsError);

impl From<TicketsError> for ApiError {
    fn from(err: TicketsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TicketsError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TicketsError::Validation(err) => {
                tracing::error!(error = %err, "invalid stored ticket");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            TicketsError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
