//! Configuration snapshots for reproducible analysis runs.
//!
//! A snapshot captures the exact configuration state at the start of a
//! run, allowing an analysis to be audited and reproduced later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::resolve::{ConfigPaths, ConfigSource};
use crate::settings::Settings;

/// A frozen snapshot of configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Hostname where snapshot was taken.
    #[serde(default)]
    pub hostname: Option<String>,

    /// Schema version of the configuration.
    pub schema_version: String,

    /// SHA-256 hash of the settings JSON content ("none" hashed when
    /// running on builtin defaults).
    pub settings_hash: String,

    /// Path where settings were loaded from.
    #[serde(default)]
    pub settings_path: Option<String>,

    /// Source of the settings configuration.
    pub settings_source: String,

    /// Key configuration values for quick reference.
    pub summary: SettingsSummary,
}

/// Summary of key configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSummary {
    /// Arrangement policy in effect.
    pub sort_order: String,

    /// Critical threshold in effect.
    pub critical_threshold: f64,
}

impl ConfigSnapshot {
    /// Create a new snapshot from loaded configuration.
    pub fn new(settings: &Settings, paths: &ConfigPaths, settings_json: Option<&str>) -> Self {
        ConfigSnapshot {
            timestamp: Utc::now(),
            hostname: hostname::get()
                .ok()
                .map(|h| h.to_string_lossy().to_string()),
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            settings_hash: hash_content(settings_json.unwrap_or("none")),
            settings_path: paths.settings.as_ref().map(|p| p.display().to_string()),
            settings_source: paths.settings_source.to_string(),
            summary: SettingsSummary {
                sort_order: settings.sort_order.to_string(),
                critical_threshold: settings.critical_threshold,
            },
        }
    }

    /// Create a snapshot with only defaults (no config file loaded).
    pub fn defaults_only() -> Self {
        let paths = ConfigPaths {
            settings: None,
            settings_source: ConfigSource::BuiltinDefault,
        };
        Self::new(&Settings::default(), &paths, None)
    }

    /// Serialize snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this snapshot matches another (same config content).
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.settings_hash == other.settings_hash
    }

    /// Get a short identifier for this snapshot (first 12 chars of hash).
    pub fn short_id(&self) -> &str {
        &self.settings_hash[..12.min(self.settings_hash.len())]
    }
}

/// Hash content with SHA-256 and return hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
