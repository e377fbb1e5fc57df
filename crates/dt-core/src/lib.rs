//! Defect Triage Core Library
//!
//! This library provides the core functionality for defect triage:
//! - The static device/sensor dataset catalog
//! - The Pareto analysis transform
//! - The recompute entry point for UI-driven callers
//! - Exit codes, logging, and output rendering for the CLI
//!
//! The binary entry point is in `main.rs`.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod recompute;
pub mod schema;

pub use analysis::{
    compute_pareto_analysis, compute_pareto_analysis_with, DEFAULT_CRITICAL_THRESHOLD,
};
pub use catalog::{default_dataset, resolve_dataset};
pub use recompute::{recompute, AnalysisRequest};
