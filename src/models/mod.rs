//! Domain models built from streaming events.
//!
//! These are plain data holders. Every field is optional and unknown fields
//! are ignored, so newer payloads keep decoding.

mod device;
mod error_message;
mod metadata;
mod structure;
mod update;

pub use device::{Camera, DeviceClass, DeviceInfo, SmokeCoAlarm, Thermostat};
pub use error_message::ErrorMessage;
pub use metadata::Metadata;
pub use structure::Structure;
pub use update::{DeviceCollection, GlobalUpdate};

use serde::{Deserialize, Deserializer};

/// Deserialize a list field, treating explicit `null` like a missing field
pub(crate) fn deserialize_nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
