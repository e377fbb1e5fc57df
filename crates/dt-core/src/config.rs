//! Settings loading for dt-core commands.
//!
//! Wraps dt-config resolution and validation behind the unified error
//! type, so command handlers deal with a single load call.

use std::path::Path;

use dt_common::{Error, Result};
use dt_config::{resolve_config, validate_settings, ConfigPaths, Settings};

/// Settings together with where they came from.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    /// Parsed and validated settings.
    pub settings: Settings,

    /// Resolved path and source.
    pub paths: ConfigPaths,

    /// Raw file content when a file was loaded (for snapshot hashing).
    pub raw_json: Option<String>,
}

/// Resolve, load, and validate settings.
///
/// An explicit CLI path that does not exist is an error; without one,
/// resolution falls through env and XDG locations to builtin defaults.
pub fn load_settings(cli_path: Option<&Path>) -> Result<LoadedSettings> {
    if let Some(path) = cli_path {
        if !path.exists() {
            return Err(Error::Config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
    }

    let paths = resolve_config(cli_path);
    match paths.settings.clone() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let settings =
                Settings::from_str(&raw).map_err(|e| Error::InvalidSettings(e.to_string()))?;
            validate_settings(&settings).map_err(|e| Error::InvalidSettings(e.to_string()))?;

            tracing::debug!(
                path = %path.display(),
                source = %paths.settings_source,
                "loaded settings"
            );

            Ok(LoadedSettings {
                settings,
                paths,
                raw_json: Some(raw),
            })
        }
        None => Ok(LoadedSettings {
            settings: Settings::default(),
            paths,
            raw_json: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_cli_path_is_an_error() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.json"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn valid_file_loads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"schema_version": "1.0.0", "sort_order": "ascending"}}"#
        )
        .unwrap();

        let loaded = load_settings(Some(file.path())).unwrap();
        assert_eq!(loaded.settings.sort_order, dt_common::SortOrder::Ascending);
        assert!(loaded.raw_json.is_some());
    }

    #[test]
    fn semantically_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"schema_version": "1.0.0", "critical_threshold": 250.0}}"#
        )
        .unwrap();

        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }
}
