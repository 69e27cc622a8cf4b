//! JSON API handler modules.

pub mod auth;
pub mod device_groups;
pub mod devices;
pub mod health;

use axum::Router;
use axum::routing::{get, post};

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};

use crate::state::AppState;

/// Build the API router.
pub fn routes<GR, DR, HP>() -> Router<AppState<GR, DR, HP>>
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::check::<GR, DR, HP>))
        .route("/login", post(auth::login))
        // Device groups
        .route(
            "/device-groups",
            get(device_groups::list::<GR, DR, HP>).post(device_groups::create::<GR, DR, HP>),
        )
        // Devices
        .route(
            "/device-groups/{group_id}/devices",
            get(devices::list::<GR, DR, HP>),
        )
}
