//! Pareto analysis transform.
//!
//! Converts an unordered observation list into ranked rows annotated with
//! individual and cumulative percentage shares of the total, plus the
//! aggregate statistics consumers need to spot the "vital few": the
//! critical row count and the Pareto efficiency ratio.
//!
//! The transform is total over its input domain: every well-formed
//! observation list, including the empty list, produces a valid result.
//! Zero totals short-circuit the percentage math instead of dividing by
//! zero, and the critical scan is skipped entirely in that case.

use dt_common::{AnalysisResult, AnalysisRow, Observation, SortOrder};

/// Default cumulative-percentage threshold separating the critical
/// leading rows from the long tail (the "80" of the 80/20 rule).
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 80.0;

/// Round to 1 decimal place, half away from zero on the scaled integer.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arrange observations according to the sort policy.
///
/// `Descending` uses a stable sort: observations with equal counts keep
/// their relative input order. `Ascending` is the exact reverse of the
/// descending arrangement, and `Custom` passes the input through
/// unmodified.
fn arrange(observations: &[Observation], order: SortOrder) -> Vec<Observation> {
    let mut arranged = observations.to_vec();
    match order {
        SortOrder::Descending => arranged.sort_by(|a, b| b.count.cmp(&a.count)),
        SortOrder::Ascending => {
            arranged.sort_by(|a, b| b.count.cmp(&a.count));
            arranged.reverse();
        }
        SortOrder::Custom => {}
    }
    arranged
}

/// Run the Pareto analysis with the default policy: descending
/// arrangement and the 80% critical threshold.
pub fn compute_pareto_analysis(observations: &[Observation]) -> AnalysisResult {
    compute_pareto_analysis_with(
        observations,
        SortOrder::Descending,
        DEFAULT_CRITICAL_THRESHOLD,
    )
}

/// Run the Pareto analysis with an explicit arrangement policy and
/// critical threshold.
///
/// The cumulative walk and the critical scan operate on the arranged
/// order, whatever policy produced it. The critical count is the number
/// of leading rows up to and including the first row whose rounded
/// cumulative percentage strictly exceeds the threshold; when no row
/// exceeds it (possible only through rounding at the tail), every row is
/// critical. A zero total yields zero percentages and a critical count
/// of zero.
pub fn compute_pareto_analysis_with(
    observations: &[Observation],
    order: SortOrder,
    critical_threshold: f64,
) -> AnalysisResult {
    let arranged = arrange(observations, order);
    let total: u64 = arranged.iter().map(|o| o.count).sum();

    let mut rows = Vec::with_capacity(arranged.len());
    let mut running: u64 = 0;
    for (idx, obs) in arranged.into_iter().enumerate() {
        running += obs.count;
        let (individual, cumulative) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                round1(obs.count as f64 / total as f64 * 100.0),
                round1(running as f64 / total as f64 * 100.0),
            )
        };
        rows.push(AnalysisRow {
            category: obs.category,
            count: obs.count,
            rank: idx + 1,
            individual_percentage: individual,
            cumulative_percentage: cumulative,
        });
    }

    let critical_count = if total == 0 {
        0
    } else {
        match rows
            .iter()
            .position(|r| r.cumulative_percentage > critical_threshold)
        {
            Some(idx) => idx + 1,
            None => rows.len(),
        }
    };

    let pareto_efficiency = if rows.is_empty() {
        0
    } else {
        (critical_count as f64 / rows.len() as f64 * 100.0).round() as u32
    };

    let top_issue_impact = rows
        .first()
        .map(|r| r.individual_percentage)
        .unwrap_or(0.0);

    AnalysisResult {
        total,
        rows,
        critical_count,
        pareto_efficiency,
        top_issue_impact,
    }
}
