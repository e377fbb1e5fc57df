//! JSON Schema generation for machine-facing output types.
//!
//! These schemas enable consumers to validate dt-core output and
//! generate bindings for the analysis payloads.
//!
//! # Usage
//!
//! ```bash
//! # List available schema types
//! dt-core schema --list
//!
//! # Generate schema for a specific type
//! dt-core schema AnalysisResult
//!
//! # Generate all schemas
//! dt-core schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::recompute::AnalysisRequest;
pub use dt_common::{AnalysisResult, AnalysisRow, Observation, SortOrder};
pub use dt_config::Settings;

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Observation", "Single category/count observation"),
        ("AnalysisRow", "Ranked, percentage-annotated analysis row"),
        ("AnalysisResult", "Aggregate Pareto analysis result"),
        ("SortOrder", "Arrangement policy for the analysis pipeline"),
        ("AnalysisRequest", "Dataset selection for a recompute call"),
        ("Settings", "Analysis settings (settings.json)"),
    ]
}

/// Generate the JSON Schema for a named type, or None if unknown.
pub fn schema_for_type(name: &str) -> Option<Value> {
    let schema = match name {
        "Observation" => schema_for!(Observation),
        "AnalysisRow" => schema_for!(AnalysisRow),
        "AnalysisResult" => schema_for!(AnalysisResult),
        "SortOrder" => schema_for!(SortOrder),
        "AnalysisRequest" => schema_for!(AnalysisRequest),
        "Settings" => schema_for!(Settings),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}

/// Generate all schemas keyed by type name.
pub fn all_schemas() -> BTreeMap<&'static str, Value> {
    available_schemas()
        .into_iter()
        .filter_map(|(name, _)| schema_for_type(name).map(|s| (name, s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_schema_generates() {
        for (name, _) in available_schemas() {
            assert!(schema_for_type(name).is_some(), "missing schema: {name}");
        }
    }

    #[test]
    fn test_unknown_type_is_none() {
        assert!(schema_for_type("NoSuchType").is_none());
    }

    #[test]
    fn test_all_schemas_complete() {
        assert_eq!(all_schemas().len(), available_schemas().len());
    }
}
