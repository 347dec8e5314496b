use std::collections::HashMap;

use crate::compare::{ComparisonReport, Delta};

/// Gate settings: a regression tolerance plus optional absolute ceilings.
///
/// `tolerance` is a fraction (0.05 allows a 5% regression); `thresholds`
/// entries are `(benchmark, metric, max after-side value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GateConfig {
    pub tolerance: f64,
    pub thresholds: Vec<(String, String, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    Pass,
    Fail(Vec<String>),
}

/// Pass/fail check over a comparison report, for CI-style enforcement.
#[derive(Clone, Debug)]
pub struct RegressionGate {
    tolerance: f64,
    thresholds: HashMap<(String, String), f64>,
}

impl RegressionGate {
    pub fn new(config: GateConfig) -> Self {
        let thresholds = config
            .thresholds
            .into_iter()
            .map(|(name, metric, max)| ((name, metric), max))
            .collect();
        Self {
            tolerance: config.tolerance,
            thresholds,
        }
    }

    /// Collects every row that regressed past the tolerance or exceeded an
    /// absolute threshold. Added, removed and before-zero rows carry no
    /// delta, so only thresholds apply to them.
    pub fn evaluate(&self, report: &ComparisonReport) -> GateOutcome {
        let mut failures = Vec::new();
        for row in &report.rows {
            if let Delta::Percent(percent) = row.delta {
                if row.improved == Some(false) && percent.abs() > self.tolerance * 100.0 {
                    failures.push(format!(
                        "{} {} regressed {percent:+.2}% (tolerance {})",
                        row.name, row.metric, self.tolerance
                    ));
                }
            }
            let key = (row.name.clone(), row.metric.clone());
            if let (Some(after), Some(max)) = (row.after, self.thresholds.get(&key)) {
                if after > *max {
                    failures.push(format!(
                        "{} {} is {after}, exceeds threshold {max}",
                        row.name, row.metric
                    ));
                }
            }
        }
        if failures.is_empty() {
            GateOutcome::Pass
        } else {
            GateOutcome::Fail(failures)
        }
    }
}
