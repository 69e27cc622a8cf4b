//! Device wire format.

use serde::Serialize;

use devicehub_domain::device::Device;
use devicehub_domain::page::Page;

/// A device as listed under its group.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub id: i64,
    pub serial_number: String,
}

impl From<Device> for DeviceDto {
    fn from(device: Device) -> Self {
        Self {
            id: device.id.get(),
            serial_number: device.serial_number,
        }
    }
}

/// `{ "devices": [...], "totalCount": n }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePageDto {
    pub devices: Vec<DeviceDto>,
    pub total_count: u64,
}

impl From<Page<Device>> for DevicePageDto {
    fn from(page: Page<Device>) -> Self {
        let page = page.map(DeviceDto::from);
        Self {
            devices: page.items,
            total_count: page.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicehub_domain::id::{DeviceGroupId, DeviceId};

    #[test]
    fn should_rename_fields_to_camel_case_and_hide_group_id() {
        let page = Page::new(
            vec![Device {
                id: DeviceId::new(3),
                serial_number: "SN-1".to_string(),
                device_group_id: DeviceGroupId::new(1),
            }],
            11,
        );

        let json = serde_json::to_value(DevicePageDto::from(page)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "devices": [{"id": 3, "serialNumber": "SN-1"}],
                "totalCount": 11
            })
        );
    }
}
