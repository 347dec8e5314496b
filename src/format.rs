use crate::compare::{ComparisonReport, Delta};

/// Renders a comparison report as a tab-separated byte table.
///
/// Total and deterministic: equal reports render byte-identically, and an
/// empty report renders a single notice line instead of failing.
pub fn render_report(report: &ComparisonReport) -> Vec<u8> {
    if report.rows.is_empty() {
        return b"no common benchmarks\n".to_vec();
    }
    let mut out = String::from("benchmark\tmetric\tbefore\tafter\tdelta\n");
    for row in &report.rows {
        out.push_str(&row.name);
        out.push('\t');
        out.push_str(&row.metric);
        out.push('\t');
        out.push_str(&value_cell(row.before));
        out.push('\t');
        out.push_str(&value_cell(row.after));
        out.push('\t');
        out.push_str(&delta_cell(&row.delta));
        out.push('\n');
    }
    out.into_bytes()
}

fn value_cell(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

fn delta_cell(delta: &Delta) -> String {
    match delta {
        Delta::Percent(percent) => format!("{percent:+.2}%"),
        Delta::Added => "added".to_string(),
        Delta::Removed => "removed".to_string(),
        Delta::BeforeZero => "before-zero".to_string(),
    }
}
