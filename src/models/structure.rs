use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structure (home) and the ids of the devices it contains
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    pub structure_id: Option<String>,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
    pub time_zone: Option<String>,
    /// "home", "away" or "auto-away"
    pub away: Option<String>,
    #[serde(deserialize_with = "super::deserialize_nullable_list")]
    pub thermostats: Vec<String>,
    #[serde(deserialize_with = "super::deserialize_nullable_list")]
    pub smoke_co_alarms: Vec<String>,
    #[serde(deserialize_with = "super::deserialize_nullable_list")]
    pub cameras: Vec<String>,
    pub peak_period_start_time: Option<DateTime<Utc>>,
    pub peak_period_end_time: Option<DateTime<Utc>>,
    /// Start of the estimated arrival window
    pub eta_begin: Option<DateTime<Utc>>,
    pub co_alarm_state: Option<String>,
    pub smoke_alarm_state: Option<String>,
    pub rhr_enrollment: Option<bool>,
    /// Named locations inside the structure, kept as sent
    pub wheres: Option<serde_json::Value>,
}

impl Structure {
    /// Total number of devices referenced by this structure
    pub fn device_count(&self) -> usize {
        self.thermostats.len() + self.smoke_co_alarms.len() + self.cameras.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_from_json() {
        let json = r#"{
            "structure_id": "VqFabWH21nwVyd4RWgJgNb292wa7hG_dUwo2i2SG7j3-BOLY0BA4sw",
            "name": "Home",
            "away": "home",
            "thermostats": ["peyiJNo0IldT2YlIVtYaGQ"],
            "smoke_co_alarms": ["RTMTKxsQTCxzVcsySOHPxKoF4OyCifrs"],
            "cameras": ["awJo6rH"],
            "time_zone": "America/Los_Angeles",
            "wwn_security_state": "ok"
        }"#;
        let structure: Structure = serde_json::from_str(json).unwrap();
        assert_eq!(structure.name.as_deref(), Some("Home"));
        assert_eq!(structure.away.as_deref(), Some("home"));
        assert_eq!(structure.device_count(), 3);
    }

    #[test]
    fn test_structure_defaults_to_empty_device_lists() {
        let structure: Structure = serde_json::from_str(r#"{"name":"Cabin"}"#).unwrap();
        assert!(structure.thermostats.is_empty());
        assert_eq!(structure.device_count(), 0);
    }

    #[test]
    fn test_structure_null_device_lists() {
        let json = r#"{"name":"Home","thermostats":null,"smoke_co_alarms":["a1"],"cameras":null}"#;
        let structure: Structure = serde_json::from_str(json).unwrap();
        assert_eq!(structure.name.as_deref(), Some("Home"));
        assert!(structure.thermostats.is_empty());
        assert!(structure.cameras.is_empty());
        assert_eq!(structure.smoke_co_alarms, vec!["a1".to_string()]);
    }
}
