//! Health check wire format.

use serde::Serialize;

use devicehub_domain::health::HealthStatus;

/// `{ "status": "healthy" }` or `{ "status": "unhealthy", "error": "..." }`
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<HealthStatus> for HealthDto {
    fn from(status: HealthStatus) -> Self {
        let name = status.as_str();
        let error = match status {
            HealthStatus::Healthy => None,
            HealthStatus::Unhealthy { error } => error,
        };
        Self {
            status: name,
            error,
        }
    }
}
