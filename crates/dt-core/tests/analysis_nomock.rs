//! No-mock end-to-end checks of the analysis pipeline.
//!
//! Covers:
//! - The canonical analysis scenarios (empty, single, boundary, all-zero)
//! - Tie-break stability and idempotence guarantees
//! - The recompute entry point over catalog and inline datasets

use dt_common::{Observation, SortOrder};
use dt_config::Settings;
use dt_core::analysis::compute_pareto_analysis;
use dt_core::catalog::default_dataset;
use dt_core::recompute::{recompute, AnalysisRequest};

fn obs(category: &str, count: u64) -> Observation {
    Observation::new(category, count)
}

#[test]
fn empty_input_produces_zeroed_result() {
    let result = compute_pareto_analysis(&[]);
    assert_eq!(result.total, 0);
    assert!(result.rows.is_empty());
    assert_eq!(result.critical_count, 0);
    assert_eq!(result.pareto_efficiency, 0);
}

#[test]
fn single_observation_owns_the_whole_distribution() {
    let result = compute_pareto_analysis(&[obs("X", 100)]);
    assert_eq!(result.rows.len(), 1);

    let row = &result.rows[0];
    assert_eq!(row.category, "X");
    assert_eq!(row.count, 100);
    assert_eq!(row.rank, 1);
    assert_eq!(row.individual_percentage, 100.0);
    assert_eq!(row.cumulative_percentage, 100.0);

    assert_eq!(result.critical_count, 1);
    assert_eq!(result.pareto_efficiency, 100);
}

#[test]
fn threshold_boundary_row_is_counted_with_its_successor() {
    // Cumulative walk [80.0, 90.0, 100.0]: A sits exactly on 80, so the
    // strictly-greater scan lands on B and the critical set is {A, B}.
    let result = compute_pareto_analysis(&[obs("A", 80), obs("B", 10), obs("C", 10)]);

    let categories: Vec<&str> = result.rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["A", "B", "C"]);

    let cumulative: Vec<f64> = result
        .rows
        .iter()
        .map(|r| r.cumulative_percentage)
        .collect();
    assert_eq!(cumulative, vec![80.0, 90.0, 100.0]);

    assert_eq!(result.critical_count, 2);
    assert_eq!(result.pareto_efficiency, 67);
}

#[test]
fn all_zero_counts_are_not_an_error() {
    let result = compute_pareto_analysis(&[obs("A", 0), obs("B", 0)]);
    assert_eq!(result.total, 0);
    assert_eq!(result.rows.len(), 2);
    assert!(result
        .rows
        .iter()
        .all(|r| r.individual_percentage == 0.0 && r.cumulative_percentage == 0.0));
    assert_eq!(result.critical_count, 0);
    assert_eq!(result.pareto_efficiency, 0);
}

#[test]
fn equal_counts_keep_input_order() {
    let result = compute_pareto_analysis(&[obs("A", 50), obs("B", 50), obs("C", 10)]);
    let categories: Vec<&str> = result.rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["A", "B", "C"]);
}

#[test]
fn repeated_transform_is_bit_identical() {
    let input = [obs("A", 285), obs("B", 162), obs("C", 145), obs("D", 98)];
    assert_eq!(
        compute_pareto_analysis(&input),
        compute_pareto_analysis(&input)
    );
}

#[test]
fn unknown_pair_analyzes_the_default_dataset() {
    let request = AnalysisRequest::for_pair("no-such-device", "no-such-sensor");
    let result = recompute(&request, &Settings::default());

    let default = compute_pareto_analysis(&default_dataset());
    assert_eq!(result, default);
    assert!(!result.rows.is_empty());
}

#[test]
fn recompute_honors_custom_order() {
    let mut settings = Settings::default();
    settings.sort_order = SortOrder::Custom;

    let request = AnalysisRequest::for_observations(vec![
        obs("Tail", 1),
        obs("Head", 99),
    ]);
    let result = recompute(&request, &settings);

    assert_eq!(result.rows[0].category, "Tail");
    assert_eq!(result.rows[0].rank, 1);
    assert_eq!(result.rows[1].cumulative_percentage, 100.0);
}

#[test]
fn recompute_honors_configured_threshold() {
    let mut settings = Settings::default();
    settings.critical_threshold = 40.0;

    let request =
        AnalysisRequest::for_observations(vec![obs("A", 50), obs("B", 30), obs("C", 20)]);
    let result = recompute(&request, &settings);

    // Cumulative [50.0, 80.0, 100.0]: first row already exceeds 40.
    assert_eq!(result.critical_count, 1);
}
