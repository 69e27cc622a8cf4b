//! Device group wire format.

use serde::{Deserialize, Serialize};

use devicehub_domain::device_group::{DeviceGroup, NewDeviceGroup};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::page::Page;

/// A device group as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroupDto {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub weather_widget_id: Option<String>,
}

impl From<DeviceGroup> for DeviceGroupDto {
    fn from(group: DeviceGroup) -> Self {
        Self {
            id: group.id.get(),
            name: group.name,
            city: group.city,
            weather_widget_id: group.weather_widget_id,
        }
    }
}

/// `{ "deviceGroups": [...], "totalCount": n }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroupPageDto {
    pub device_groups: Vec<DeviceGroupDto>,
    pub total_count: u64,
}

impl From<Page<DeviceGroup>> for DeviceGroupPageDto {
    fn from(page: Page<DeviceGroup>) -> Self {
        let page = page.map(DeviceGroupDto::from);
        Self {
            device_groups: page.items,
            total_count: page.total_count,
        }
    }
}

/// Request body for creating a device group.
///
/// `name` and `city` are optional here so that a missing field surfaces as a
/// domain validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceGroupRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub weather_widget_id: Option<String>,
}

impl TryFrom<CreateDeviceGroupRequest> for NewDeviceGroup {
    type Error = DeviceHubError;

    fn try_from(req: CreateDeviceGroupRequest) -> Result<Self, Self::Error> {
        let mut builder = NewDeviceGroup::builder();
        if let Some(name) = req.name {
            builder = builder.name(name);
        }
        if let Some(city) = req.city {
            builder = builder.city(city);
        }
        if let Some(weather_widget_id) = req.weather_widget_id {
            builder = builder.weather_widget_id(weather_widget_id);
        }
        builder.build()
    }
}
