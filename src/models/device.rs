use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Device classes the streaming API groups devices under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Thermostats,
    SmokeCoAlarms,
    Cameras,
}

impl DeviceClass {
    /// Every known class, in the order updates list them
    pub const ALL: [DeviceClass; 3] = [
        DeviceClass::Thermostats,
        DeviceClass::SmokeCoAlarms,
        DeviceClass::Cameras,
    ];

    /// Match a path segment such as "smoke_co_alarms"
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "thermostats" => Some(DeviceClass::Thermostats),
            "smoke_co_alarms" => Some(DeviceClass::SmokeCoAlarms),
            "cameras" => Some(DeviceClass::Cameras),
            _ => None,
        }
    }

    /// The wire name of this class
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Thermostats => "thermostats",
            DeviceClass::SmokeCoAlarms => "smoke_co_alarms",
            DeviceClass::Cameras => "cameras",
        }
    }
}

/// Attributes every device carries regardless of class
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub device_id: Option<String>,
    pub locale: Option<String>,
    pub software_version: Option<String>,
    pub structure_id: Option<String>,
    pub where_id: Option<String>,
    pub name: Option<String>,
    pub name_long: Option<String>,
    pub is_online: Option<bool>,
    pub last_connection: Option<DateTime<Utc>>,
}

/// A thermostat as reported by the streaming API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thermostat {
    #[serde(flatten)]
    pub info: DeviceInfo,
    pub can_cool: Option<bool>,
    pub can_heat: Option<bool>,
    pub is_using_emergency_heat: Option<bool>,
    pub has_fan: Option<bool>,
    pub fan_timer_active: Option<bool>,
    pub fan_timer_timeout: Option<DateTime<Utc>>,
    pub has_leaf: Option<bool>,
    /// "F" or "C"
    pub temperature_scale: Option<String>,
    pub target_temperature_f: Option<f64>,
    pub target_temperature_c: Option<f64>,
    pub target_temperature_high_f: Option<f64>,
    pub target_temperature_high_c: Option<f64>,
    pub target_temperature_low_f: Option<f64>,
    pub target_temperature_low_c: Option<f64>,
    pub away_temperature_high_f: Option<f64>,
    pub away_temperature_high_c: Option<f64>,
    pub away_temperature_low_f: Option<f64>,
    pub away_temperature_low_c: Option<f64>,
    /// "heat", "cool", "heat-cool", "eco" or "off"
    pub hvac_mode: Option<String>,
    pub ambient_temperature_f: Option<f64>,
    pub ambient_temperature_c: Option<f64>,
    pub humidity: Option<i64>,
    pub hvac_state: Option<String>,
}

/// A Nest Protect smoke and CO alarm
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeCoAlarm {
    #[serde(flatten)]
    pub info: DeviceInfo,
    /// "ok" or "replace"
    pub battery_health: Option<String>,
    /// "ok", "warning" or "emergency"
    pub co_alarm_state: Option<String>,
    pub smoke_alarm_state: Option<String>,
    pub is_manual_test_active: Option<bool>,
    pub last_manual_test_time: Option<DateTime<Utc>>,
    pub ui_color_state: Option<String>,
}

/// A camera and its sharing/streaming state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    #[serde(flatten)]
    pub info: DeviceInfo,
    pub is_streaming: Option<bool>,
    pub is_audio_input_enabled: Option<bool>,
    pub last_is_online_change: Option<DateTime<Utc>>,
    pub is_video_history_enabled: Option<bool>,
    pub web_url: Option<String>,
    pub app_url: Option<String>,
    pub is_public_share_enabled: Option<bool>,
    pub public_share_url: Option<String>,
    pub snapshot_url: Option<String>,
    /// Most recent motion/sound event, kept as sent
    pub last_event: Option<serde_json::Value>,
}
