//! Configuration validation errors and semantic validation.

use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate analysis settings semantically.
pub fn validate_settings(settings: &crate::settings::Settings) -> ValidationResult<()> {
    // Check schema version
    if settings.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: settings.schema_version.clone(),
        });
    }

    // Threshold must be a percentage strictly between 0 and 100; the
    // endpoints would make every row (or no row) critical.
    if !settings.critical_threshold.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: "critical_threshold".to_string(),
            message: format!("Must be finite, got {}", settings.critical_threshold),
        });
    }

    if settings.critical_threshold <= 0.0 || settings.critical_threshold >= 100.0 {
        return Err(ValidationError::InvalidValue {
            field: "critical_threshold".to_string(),
            message: format!(
                "Must be strictly between 0 and 100, got {}",
                settings.critical_threshold
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_default_settings_validate() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_version_mismatch() {
        let mut settings = Settings::default();
        settings.schema_version = "0.9.0".to_string();
        let err = validate_settings(&settings).unwrap_err();
        assert_eq!(err.code(), 66);
    }

    #[test]
    fn test_threshold_bounds() {
        let mut settings = Settings::default();

        settings.critical_threshold = 0.0;
        assert!(validate_settings(&settings).is_err());

        settings.critical_threshold = 100.0;
        assert!(validate_settings(&settings).is_err());

        settings.critical_threshold = f64::NAN;
        assert!(validate_settings(&settings).is_err());

        settings.critical_threshold = 50.0;
        assert!(validate_settings(&settings).is_ok());
    }
}
