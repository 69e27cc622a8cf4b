//! Health service: single-shot connectivity check against the store.

use std::time::Duration;

use devicehub_domain::health::HealthStatus;

use crate::ports::HealthProbe;
use crate::services::{DEFAULT_CALL_TIMEOUT, with_deadline};

/// Application service reporting whether the backing store answers.
pub struct HealthService<P> {
    probe: P,
    call_timeout: Duration,
}

impl<P: HealthProbe> HealthService<P> {
    /// Create a new service backed by the given probe.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the deadline applied to the probe.
    #[must_use]
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Run the probe once. Failures never propagate: they become
    /// [`HealthStatus::Unhealthy`] carrying the error message.
    pub async fn check(&self) -> HealthStatus {
        match with_deadline("health_check", self.call_timeout, self.probe.ping()).await {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                HealthStatus::Unhealthy {
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
