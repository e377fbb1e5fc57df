//! Analysis settings types.
//!
//! Settings cover the behavioral knobs of the analysis pipeline: the
//! arrangement policy and the critical threshold. Visual configuration
//! (colors, fonts, sizes) belongs to presentation layers and has no
//! representation here.

use dt_common::SortOrder;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Arrangement policy applied before the cumulative walk.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Cumulative-percentage threshold separating the critical leading
    /// rows from the long tail. Must lie strictly between 0 and 100.
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
}

fn default_critical_threshold() -> f64 {
    80.0
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            sort_order: SortOrder::Descending,
            critical_threshold: default_critical_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::validate::ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::validate::ValidationError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse settings from a JSON string.
    pub fn from_str(json: &str) -> Result<Self, crate::validate::ValidationError> {
        serde_json::from_str(json).map_err(|e| {
            crate::validate::ValidationError::ParseError(format!("Invalid JSON: {}", e))
        })
    }
}
