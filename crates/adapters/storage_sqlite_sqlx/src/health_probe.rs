//! `SQLite` implementation of [`HealthProbe`].

use sqlx::SqlitePool;

use devicehub_app::ports::HealthProbe;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::health::HealthStatus;

use crate::error::StorageError;

const PROBE: &str = "SELECT 1";

/// Probes the pool with `SELECT 1`.
pub struct SqliteHealthProbe {
    pool: SqlitePool,
}

impl SqliteHealthProbe {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HealthProbe for SqliteHealthProbe {
    async fn ping(&self) -> Result<HealthStatus, DeviceHubError> {
        let value: i64 = sqlx::query_scalar(PROBE)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if value == 1 {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy { error: None })
        }
    }
}
