//! Profile configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level profile configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Name of the active profile
    #[serde(rename = "current-profile", skip_serializing_if = "Option::is_none")]
    pub current_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// A named set of connection parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "api-key", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API origin; the default origin is used when unset
    #[serde(rename = "base-url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProfileConfig {
    /// The active profile, if one is set and present
    pub fn current(&self) -> Option<(&str, &Profile)> {
        let name = self.current_profile.as_deref()?;
        self.profiles.get(name).map(|p| (name, p))
    }

    /// Comma-separated profile names for error messages
    pub fn available(&self) -> String {
        if self.profiles.is_empty() {
            return "<none>".to_string();
        }
        self.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
