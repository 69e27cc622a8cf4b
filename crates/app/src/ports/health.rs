//! Health port: liveness probe against the backing store.

use std::future::Future;

use devicehub_domain::error::DeviceHubError;
use devicehub_domain::health::HealthStatus;

/// Runs a trivial query to prove the store is reachable.
pub trait HealthProbe {
    /// Execute the probe once.
    ///
    /// Returns [`HealthStatus::Unhealthy`] without detail when the query ran
    /// but produced an unexpected result, and an error when it could not run.
    fn ping(&self) -> impl Future<Output = Result<HealthStatus, DeviceHubError>> + Send;
}
