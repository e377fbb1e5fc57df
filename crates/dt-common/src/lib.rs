//! Defect Triage common types and errors.
//!
//! This crate provides foundational types shared across dt-core modules:
//! - Observation and analysis result types
//! - Sort order policies for the analysis pipeline
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod observation;
pub mod output;

pub use error::{Error, Result};
pub use observation::{AnalysisResult, AnalysisRow, Observation, SortOrder};
pub use output::OutputFormat;

/// Schema version for machine-facing output payloads.
pub const SCHEMA_VERSION: &str = "1.0.0";
