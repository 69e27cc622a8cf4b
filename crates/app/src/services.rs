//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Every port call runs under a deadline; no call is retried.

use std::future::Future;
use std::time::Duration;

use devicehub_domain::error::{DeviceHubError, TimeoutError};

pub mod device_group_service;
pub mod device_service;
pub mod health_service;

/// Deadline applied to port calls unless a service is configured otherwise.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `fut`, failing with [`DeviceHubError::Timeout`] once `after` elapses.
pub(crate) async fn with_deadline<T, F>(
    operation: &'static str,
    after: Duration,
    fut: F,
) -> Result<T, DeviceHubError>
where
    F: Future<Output = Result<T, DeviceHubError>>,
{
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_ms = after.as_millis(), "port call timed out");
            Err(TimeoutError { operation, after }.into())
        }
    }
}
