//! Shared application state for axum handlers.

use std::sync::Arc;

use devicehub_app::ports::{DeviceGroupRepository, DeviceRepository, HealthProbe};
use devicehub_app::services::device_group_service::DeviceGroupService;
use devicehub_app::services::device_service::DeviceService;
use devicehub_app::services::health_service::HealthService;
use devicehub_domain::id::UserId;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and probe types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<GR, DR, HP> {
    /// Device group list/create service.
    pub device_group_service: Arc<DeviceGroupService<GR>>,
    /// Device listing service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Store connectivity check.
    pub health_service: Arc<HealthService<HP>>,
    /// Owner recorded on created device groups until requests carry an
    /// authenticated principal.
    pub default_owner: UserId,
}

impl<GR, DR, HP> Clone for AppState<GR, DR, HP> {
    fn clone(&self) -> Self {
        Self {
            device_group_service: Arc::clone(&self.device_group_service),
            device_service: Arc::clone(&self.device_service),
            health_service: Arc::clone(&self.health_service),
            default_owner: self.default_owner,
        }
    }
}

impl<GR, DR, HP> AppState<GR, DR, HP>
where
    GR: DeviceGroupRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    HP: HealthProbe + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        device_group_service: DeviceGroupService<GR>,
        device_service: DeviceService<DR>,
        health_service: HealthService<HP>,
        default_owner: UserId,
    ) -> Self {
        Self {
            device_group_service: Arc::new(device_group_service),
            device_service: Arc::new(device_service),
            health_service: Arc::new(health_service),
            default_owner,
        }
    }
}
