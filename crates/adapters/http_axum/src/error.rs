//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_domain::error::{DeviceHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DeviceHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DeviceHubError);

impl From<DeviceHubError> for ApiError {
    fn from(err: DeviceHubError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        malformed(rejection.body_text())
    }
}

fn malformed(message: String) -> ApiError {
    ApiError(ValidationError::MalformedRequest(message).into())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DeviceHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DeviceHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DeviceHubError::Timeout(err) => {
                tracing::warn!(error = %err, "storage call timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "storage did not respond in time".to_string(),
                )
            }
            DeviceHubError::Storage(err) => {
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
