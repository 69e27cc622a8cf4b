//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};

use crate::dto::health::HealthDto;
use crate::state::AppState;

/// `GET /health`: 200 when the store answers, 500 with detail otherwise.
pub async fn check<GR, DR, HP>(
    State(state): State<AppState<GR, DR, HP>>,
) -> (StatusCode, Json<HealthDto>)
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    let status = state.health_service.check().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (code, Json(HealthDto::from(status)))
}
