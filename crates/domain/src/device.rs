//! Device: a serial-numbered piece of hardware that belongs to one device group.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceGroupId, DeviceId};

/// A device registered under a [`DeviceGroup`](crate::device_group::DeviceGroup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub serial_number: String,
    pub device_group_id: DeviceGroupId,
}
