//! Device group service: use-cases for listing and creating device groups.

use std::time::Duration;

use devicehub_domain::device_group::{DeviceGroup, NewDeviceGroup};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::UserId;
use devicehub_domain::page::{Page, PageRequest};

use crate::ports::DeviceGroupRepository;
use crate::services::{DEFAULT_CALL_TIMEOUT, with_deadline};

/// Application service for device group operations.
pub struct DeviceGroupService<R> {
    repo: R,
    call_timeout: Duration,
}

impl<R: DeviceGroupRepository> DeviceGroupService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the deadline applied to every repository call.
    #[must_use]
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// List one page of device groups ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Timeout`] when the repository misses its
    /// deadline, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, page), fields(page_number = page.page_number(), page_size = page.limit()))]
    pub async fn list_device_groups(
        &self,
        page: PageRequest,
    ) -> Result<Page<DeviceGroup>, DeviceHubError> {
        with_deadline("list_device_groups", self.call_timeout, self.repo.list_page(page)).await
    }

    /// Create a device group on behalf of `owner` after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if invariants fail (nothing is
    /// inserted), [`DeviceHubError::Timeout`] on a missed deadline, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, owner, group), fields(owner = %owner, group_name = %group.name))]
    pub async fn create_device_group(
        &self,
        owner: UserId,
        group: NewDeviceGroup,
    ) -> Result<DeviceGroup, DeviceHubError> {
        group.validate()?;
        let created = with_deadline(
            "create_device_group",
            self.call_timeout,
            self.repo.create(owner, group),
        )
        .await?;
        tracing::info!(id = %created.id, "device group created");
        Ok(created)
    }
}
