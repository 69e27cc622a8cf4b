//! Device service: use-cases for reading devices.

use std::time::Duration;

use devicehub_domain::device::Device;
use devicehub_domain::error::{DeviceHubError, NotFoundError};
use devicehub_domain::id::DeviceGroupId;
use devicehub_domain::page::{Page, PageRequest};

use crate::ports::DeviceRepository;
use crate::services::{DEFAULT_CALL_TIMEOUT, with_deadline};

/// Application service for device read operations.
pub struct DeviceService<R> {
    repo: R,
    call_timeout: Duration,
}

impl<R: DeviceRepository> DeviceService<R> {
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

    /// List one page of the devices in `group_id`, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when the group does not exist,
    /// [`DeviceHubError::Timeout`] on a missed deadline, or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self, page), fields(page_number = page.page_number(), page_size = page.limit()))]
    pub async fn list_devices(
        &self,
        group_id: DeviceGroupId,
        page: PageRequest,
    ) -> Result<Page<Device>, DeviceHubError> {
        with_deadline(
            "list_devices",
            self.call_timeout,
            self.repo.list_page_by_group(group_id, page),
        )
        .await?
        .ok_or_else(|| {
            NotFoundError {
                entity: "DeviceGroup",
                id: group_id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicehub_domain::id::DeviceId;
    use std::collections::HashSet;

    struct InMemoryDeviceRepo {
        groups: HashSet<DeviceGroupId>,
        devices: Vec<Device>,
    }

    impl InMemoryDeviceRepo {
        fn seeded() -> Self {
            let groups = HashSet::from([DeviceGroupId::new(1), DeviceGroupId::new(2)]);
            let devices = (1..=12)
                .map(|n| Device {
                    id: DeviceId::new(n),
                    serial_number: format!("SN-{n:04}"),
                    device_group_id: DeviceGroupId::new(if n % 3 == 0 { 2 } else { 1 }),
                })
                .collect();
            Self { groups, devices }
        }
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        async fn list_page_by_group(
            &self,
            group_id: DeviceGroupId,
            page: PageRequest,
        ) -> Result<Option<Page<Device>>, DeviceHubError> {
            if !self.groups.contains(&group_id) {
                return Ok(None);
            }
            let matching: Vec<&Device> = self
                .devices
                .iter()
                .filter(|d| d.device_group_id == group_id)
                .collect();
            let items = matching
                .iter()
                .skip(usize::try_from(page.offset()).unwrap())
                .take(usize::try_from(page.limit()).unwrap())
                .map(|d| (*d).clone())
                .collect();
            Ok(Some(Page::new(items, matching.len() as u64)))
        }
    }

    #[tokio::test]
    async fn should_only_return_devices_of_requested_group() {
        let svc = DeviceService::new(InMemoryDeviceRepo::seeded());

        let page = svc
            .list_devices(DeviceGroupId::new(2), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total_count, 4);
        assert!(
            page.items
                .iter()
                .all(|d| d.device_group_id == DeviceGroupId::new(2))
        );
    }

    #[tokio::test]
    async fn should_keep_total_count_stable_across_pages() {
        let svc = DeviceService::new(InMemoryDeviceRepo::seeded());

        let first = svc
            .list_devices(DeviceGroupId::new(1), PageRequest::new(1, 5).unwrap())
            .await
            .unwrap();
        let second = svc
            .list_devices(DeviceGroupId::new(1), PageRequest::new(2, 5).unwrap())
            .await
            .unwrap();

        assert_eq!(first.total_count, 8);
        assert_eq!(second.total_count, 8);
        assert_eq!(first.items.len(), 5);
        assert_eq!(second.items.len(), 3);
    }

    #[tokio::test]
    async fn should_return_empty_page_past_the_end() {
        let svc = DeviceService::new(InMemoryDeviceRepo::seeded());

        let page = svc
            .list_devices(DeviceGroupId::new(1), PageRequest::new(9, 10).unwrap())
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 8);
    }

    #[tokio::test]
    async fn should_return_not_found_when_group_missing() {
        let svc = DeviceService::new(InMemoryDeviceRepo::seeded());

        let result = svc
            .list_devices(DeviceGroupId::new(99), PageRequest::default())
            .await;

        assert!(matches!(result, Err(DeviceHubError::NotFound(ref err)) if err.id == "99"));
    }
}
