//! Axum router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Every route allows any origin, method and header. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<GR, DR, HP>(state: AppState<GR, DR, HP>) -> Router
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
