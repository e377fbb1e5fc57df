//! Defect Triage configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for settings.json
//! - Config resolution (CLI → env → XDG → defaults)
//! - Schema and semantic validation
//! - Config snapshots for reproducible analysis runs

pub mod resolve;
pub mod settings;
pub mod snapshot;
pub mod validate;

pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use settings::Settings;
pub use snapshot::ConfigSnapshot;
pub use validate::{validate_settings, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
