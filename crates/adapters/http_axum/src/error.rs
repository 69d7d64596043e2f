//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use eventos_domain::error::EventosError;

/// JSON error body returned by API endpoints.
#[derive(Serialize, ToSchema)]
#[schema(examples(json!({"code": "not_found", "error": "Evento with id X not found"})))]
pub struct ErrorBody {
    /// Machine-readable code: `not_found`, `invalid_body` or `internal`.
    code: String,
    /// Human-readable message.
    error: String,
}

/// Maps failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A service call failed.
    Domain(EventosError),
    /// The request body could not be extracted.
    Body(JsonRejection),
}

impl From<EventosError> for ApiError {
    fn from(err: EventosError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Domain(EventosError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            Self::Domain(err @ EventosError::IdGeneration { .. }) => {
                tracing::error!(error = %err, "id generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                )
            }
            Self::Domain(EventosError::Storage(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => (rejection.status(), "invalid_body", rejection.body_text()),
        };

        (
            status,
            Json(ErrorBody {
                code: code.to_string(),
                error: message,
            }),
        )
            .into_response()
    }
}
