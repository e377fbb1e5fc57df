//! Rendering of analysis results for CLI consumers.

use chrono::Utc;
use dt_common::{AnalysisResult, OutputFormat, Result};

/// Render an analysis result in the requested format.
pub fn render_result(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Md => Ok(render_md(result)),
        OutputFormat::Summary => Ok(render_summary(result)),
    }
}

fn render_md(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("# Pareto Analysis\n\n");
    out.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));
    out.push_str(&format!(
        "- Total observations: {}\n- Critical categories: {} of {}\n- Pareto efficiency: {}%\n- Top issue impact: {:.1}%\n\n",
        result.total,
        result.critical_count,
        result.rows.len(),
        result.pareto_efficiency,
        result.top_issue_impact,
    ));

    out.push_str("| Rank | Category | Count | Individual % | Cumulative % |\n");
    out.push_str("|-----:|----------|------:|-------------:|-------------:|\n");
    for row in &result.rows {
        out.push_str(&format!(
            "| {} | {} | {} | {:.1} | {:.1} |\n",
            row.rank,
            row.category,
            row.count,
            row.individual_percentage,
            row.cumulative_percentage,
        ));
    }

    out
}

fn render_summary(result: &AnalysisResult) -> String {
    format!(
        "total={} rows={} critical={} efficiency={}% top_impact={:.1}%",
        result.total,
        result.rows.len(),
        result.critical_count,
        result.pareto_efficiency,
        result.top_issue_impact,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_pareto_analysis;
    use dt_common::Observation;

    fn sample() -> AnalysisResult {
        compute_pareto_analysis(&[
            Observation::new("A", 80),
            Observation::new("B", 10),
            Observation::new("C", 10),
        ])
    }

    #[test]
    fn json_output_is_parseable() {
        let rendered = render_result(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total"], 100);
        assert_eq!(value["critical_count"], 2);
    }

    #[test]
    fn md_output_has_one_table_row_per_analysis_row() {
        let rendered = render_result(&sample(), OutputFormat::Md).unwrap();
        assert!(rendered.starts_with("# Pareto Analysis"));
        // Header line plus one line per analysis row
        let table_rows = rendered.lines().filter(|l| l.starts_with("| ")).count();
        assert_eq!(table_rows, 4);
        assert!(rendered.contains("| 1 | A | 80 | 80.0 | 80.0 |"));
    }

    #[test]
    fn summary_is_one_line() {
        let rendered = render_result(&sample(), OutputFormat::Summary).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert_eq!(
            rendered,
            "total=100 rows=3 critical=2 efficiency=67% top_impact=80.0%"
        );
    }
}
