//! Explicit recompute entry point for UI-driven callers.
//!
//! Presentation layers call [`recompute`] whenever the device, sensor,
//! or underlying data changes. The engine holds no UI state: every
//! invocation re-resolves the dataset and re-derives the full result
//! from scratch, so rapid repeated calls are independent by
//! construction.

use dt_common::{AnalysisResult, Observation};
use dt_config::Settings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::compute_pareto_analysis_with;
use crate::catalog;

/// A single recompute request: which dataset to analyze.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRequest {
    /// Device identifier; empty when no device is selected.
    #[serde(default)]
    pub device: String,

    /// Sensor identifier; empty when no sensor is selected. A device
    /// change resets the selection upstream, so callers re-request with
    /// an empty sensor until a new one is chosen and the default
    /// dataset is analyzed in the meantime.
    #[serde(default)]
    pub sensor: String,

    /// Inline observations; takes precedence over catalog resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<Vec<Observation>>,
}

impl AnalysisRequest {
    /// Request analysis of a catalog dataset.
    pub fn for_pair(device: impl Into<String>, sensor: impl Into<String>) -> Self {
        AnalysisRequest {
            device: device.into(),
            sensor: sensor.into(),
            observations: None,
        }
    }

    /// Request analysis of an inline observation list.
    pub fn for_observations(observations: Vec<Observation>) -> Self {
        AnalysisRequest {
            device: String::new(),
            sensor: String::new(),
            observations: Some(observations),
        }
    }
}

/// Resolve the requested dataset and run the Pareto analysis under the
/// given settings.
pub fn recompute(request: &AnalysisRequest, settings: &Settings) -> AnalysisResult {
    let observations = match &request.observations {
        Some(inline) => inline.clone(),
        None => catalog::resolve_dataset(&request.device, &request.sensor),
    };

    tracing::debug!(
        device = %request.device,
        sensor = %request.sensor,
        observations = observations.len(),
        sort_order = %settings.sort_order,
        threshold = settings.critical_threshold,
        "recomputing pareto analysis"
    );

    compute_pareto_analysis_with(
        &observations,
        settings.sort_order,
        settings.critical_threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_common::SortOrder;

    #[test]
    fn catalog_pair_is_resolved_and_analyzed() {
        let request = AnalysisRequest::for_pair("device-001", "temperature");
        let result = recompute(&request, &Settings::default());
        assert_eq!(result.total, 825);
        assert_eq!(result.rows.len(), 7);
        assert_eq!(result.rows[0].category, "Overheating Events");
    }

    #[test]
    fn inline_observations_take_precedence() {
        let mut request = AnalysisRequest::for_pair("device-001", "temperature");
        request.observations = Some(vec![Observation::new("Only", 10)]);
        let result = recompute(&request, &Settings::default());
        assert_eq!(result.total, 10);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn empty_sensor_analyzes_default_dataset() {
        let request = AnalysisRequest::for_pair("device-001", "");
        let result = recompute(&request, &Settings::default());
        assert_eq!(result.total, 1682);
        assert_eq!(result.rows.len(), 14);
    }

    #[test]
    fn settings_sort_order_is_honored() {
        let request = AnalysisRequest::for_pair("device-001", "temperature");
        let mut settings = Settings::default();
        settings.sort_order = SortOrder::Ascending;
        let result = recompute(&request, &settings);
        assert_eq!(result.rows[0].category, "Hardware Malfunction");
    }

    #[test]
    fn repeated_calls_are_independent() {
        let request = AnalysisRequest::for_pair("device-003", "pressure");
        let settings = Settings::default();
        let first = recompute(&request, &settings);
        let second = recompute(&request, &settings);
        assert_eq!(first, second);
    }
}
