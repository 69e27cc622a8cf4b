//! Storage port: repository traits for persistence.

use std::future::Future;

use devicehub_domain::device::Device;
use devicehub_domain::device_group::{DeviceGroup, NewDeviceGroup};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceGroupId, UserId};
use devicehub_domain::page::{Page, PageRequest};

/// Repository for persisting and paging through [`DeviceGroup`]s.
pub trait DeviceGroupRepository {
    /// Insert a new group owned by `owner` and return it with its generated id.
    fn create(
        &self,
        owner: UserId,
        group: NewDeviceGroup,
    ) -> impl Future<Output = Result<DeviceGroup, DeviceHubError>> + Send;

    /// Fetch one id-ascending window of all groups together with the total count.
    ///
    /// Implementations must read the window and the count from one
    /// consistent view.
    fn list_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<DeviceGroup>, DeviceHubError>> + Send;
}

/// Repository for reading [`Device`]s.
pub trait DeviceRepository {
    /// Fetch one id-ascending window of the devices in `group_id` together
    /// with the number of devices in that group.
    ///
    /// Returns `None` when the group itself does not exist.
    fn list_page_by_group(
        &self,
        group_id: DeviceGroupId,
        page: PageRequest,
    ) -> impl Future<Output = Result<Option<Page<Device>>, DeviceHubError>> + Send;
}
