//! Application settings model.
//!
//! # Invariants
//! - Missing or unreadable stored settings resolve to the defaults below,
//!   never to an error surfaced at the caller.

use serde::{Deserialize, Serialize};

/// User-tunable application settings persisted as one blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Whether the external text assistant may be called.
    #[serde(rename = "enableAI")]
    pub enable_ai: bool,
}

impl Default for AppSettings {
    /// AI assistance defaults to enabled when no settings were ever saved.
    fn default() -> Self {
        Self { enable_ai: true }
    }
}

#[cfg(test)]
mod tests {
    use super::AppSettings;

    #[test]
    fn default_enables_ai() {
        assert!(AppSettings::default().enable_ai);
    }

    #[test]
    fn serde_field_name_matches_stored_blob() {
        let json = serde_json::to_string(&AppSettings { enable_ai: false }).unwrap();
        assert_eq!(json, "{\"enableAI\":false}");
        let parsed: AppSettings = serde_json::from_str("{\"enableAI\":true}").unwrap();
        assert!(parsed.enable_ai);
    }
}
