//! Observation and analysis result types.
//!
//! An [`Observation`] is a single (category, count) pair from a telemetry
//! dataset. The analysis pipeline ranks observations by frequency and
//! annotates each with its individual and cumulative share of the total,
//! producing one [`AnalysisRow`] per input observation and an aggregate
//! [`AnalysisResult`].
//!
//! Counts are unsigned by construction: a dataset with negative counts is
//! rejected at deserialization rather than silently repaired.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single category/count observation from a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    /// Category label, unique within a dataset for meaningful ranking.
    pub category: String,

    /// Number of occurrences recorded for this category.
    pub count: u64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Observation {
            category: category.into(),
            count,
        }
    }
}

/// One ranked, percentage-annotated row of a Pareto analysis.
///
/// Rows are derived read-only values; `category` and `count` are copied
/// through from the source observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRow {
    /// Category label copied from the source observation.
    pub category: String,

    /// Occurrence count copied from the source observation.
    pub count: u64,

    /// 1-based position in the arranged order.
    pub rank: usize,

    /// This row's share of the total, as a percentage rounded to 1 decimal.
    pub individual_percentage: f64,

    /// Running share of the total up to and including this row,
    /// as a percentage rounded to 1 decimal.
    pub cumulative_percentage: f64,
}

/// Aggregate result of a Pareto analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Sum of all observation counts.
    pub total: u64,

    /// Analysis rows in arranged order (descending by count unless
    /// another [`SortOrder`] was requested).
    pub rows: Vec<AnalysisRow>,

    /// Number of leading rows whose cumulative share first crosses the
    /// critical threshold. Zero when the total is zero.
    pub critical_count: usize,

    /// `critical_count / rows.len()` as a percentage rounded to the
    /// nearest integer. Zero for empty input.
    pub pareto_efficiency: u32,

    /// Individual percentage of the leading row, or 0 when empty.
    pub top_issue_impact: f64,
}

impl AnalysisResult {
    /// An empty result: no rows, zero total, zero statistics.
    pub fn empty() -> Self {
        AnalysisResult {
            total: 0,
            rows: Vec::new(),
            critical_count: 0,
            pareto_efficiency: 0,
            top_issue_impact: 0.0,
        }
    }
}

/// Arrangement policy applied before the cumulative-percentage walk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Sort by count, high to low. Ties preserve input order.
    #[default]
    Descending,

    /// Sort by count, low to high (reverse of descending).
    Ascending,

    /// Keep the input order unmodified.
    Custom,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Descending => write!(f, "descending"),
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Custom => write!(f, "custom"),
        }
    }
}
