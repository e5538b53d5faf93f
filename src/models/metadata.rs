use serde::{Deserialize, Serialize};

/// Metadata block sent alongside every full update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub access_token: Option<String>,
    pub client_version: Option<i64>,
    pub user_id: Option<String>,
}

impl Metadata {
    /// True when no metadata field was present in the payload
    pub fn is_empty(&self) -> bool {
        self == &Metadata::default()
    }
}
