use serde::{Deserialize, Serialize};

use super::{Camera, DeviceClass, Metadata, SmokeCoAlarm, Structure, Thermostat};

/// Devices grouped by class, each list in the order the payload listed them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceCollection {
    pub thermostats: Vec<Thermostat>,
    pub smoke_co_alarms: Vec<SmokeCoAlarm>,
    pub cameras: Vec<Camera>,
}

impl DeviceCollection {
    /// Number of devices in one class
    pub fn count(&self, class: DeviceClass) -> usize {
        match class {
            DeviceClass::Thermostats => self.thermostats.len(),
            DeviceClass::SmokeCoAlarms => self.smoke_co_alarms.len(),
            DeviceClass::Cameras => self.cameras.len(),
        }
    }

    /// Number of devices across all classes
    pub fn len(&self) -> usize {
        DeviceClass::ALL.iter().map(|class| self.count(*class)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot of the account delivered by a `put` event
///
/// A payload that carries none of the three sections still produces a
/// `GlobalUpdate`; every collection is then empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalUpdate {
    pub devices: DeviceCollection,
    pub metadata: Metadata,
    pub structures: Vec<Structure>,
}

impl GlobalUpdate {
    pub fn thermostats(&self) -> &[Thermostat] {
        &self.devices.thermostats
    }

    pub fn smoke_co_alarms(&self) -> &[SmokeCoAlarm] {
        &self.devices.smoke_co_alarms
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.devices.cameras
    }

    /// True when the update carried no devices, structures or metadata
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.structures.is_empty() && self.metadata.is_empty()
    }
}
