use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::BenchVaultError;
use crate::parse::BenchmarkRun;

/// Whether a metric improves when its value goes down or up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricDirection {
    LowerIsBetter,
    HigherIsBetter,
}

/// Explicit lookup from metric key to direction.
///
/// Unrecognized keys default to [`MetricDirection::LowerIsBetter`], which is
/// correct for the cost metrics benchmark tools emit. Callers can register
/// additional keys for throughput-style metrics.
#[derive(Clone, Debug)]
pub struct DirectionTable {
    directions: AHashMap<String, MetricDirection>,
}

impl DirectionTable {
    /// Table covering the standard cost metrics plus `MB/s` throughput.
    pub fn standard() -> Self {
        let mut table = Self {
            directions: AHashMap::new(),
        };
        table.register("ns/op", MetricDirection::LowerIsBetter);
        table.register("B/op", MetricDirection::LowerIsBetter);
        table.register("allocs/op", MetricDirection::LowerIsBetter);
        table.register("MB/s", MetricDirection::HigherIsBetter);
        table
    }

    pub fn register<T: Into<String>>(&mut self, metric: T, direction: MetricDirection) {
        self.directions.insert(metric.into(), direction);
    }

    pub fn direction_for(&self, metric: &str) -> MetricDirection {
        self.directions
            .get(metric)
            .copied()
            .unwrap_or(MetricDirection::LowerIsBetter)
    }
}

impl Default for DirectionTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Percentage change of one metric, or the status of a one-sided row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delta {
    /// `(after - before) / before * 100`, both sides present.
    Percent(f64),
    /// Benchmark or metric only present on the after side.
    Added,
    /// Benchmark or metric only present on the before side.
    Removed,
    /// Both sides present but the before value is zero, so no percentage.
    BeforeZero,
}

/// One aligned metric of one benchmark across the two runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub metric: String,
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub delta: Delta,
    /// Direction-aware verdict for nonzero percentage rows, `None` otherwise.
    pub improved: Option<bool>,
}

/// The full set of rows for one comparison, ordered by benchmark name then
/// metric key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn regressions(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| row.improved == Some(false))
    }
}

/// Compares two runs with the standard direction table.
pub fn compare_runs(
    before: &BenchmarkRun,
    after: &BenchmarkRun,
) -> Result<ComparisonReport, BenchVaultError> {
    compare_runs_with(before, after, &DirectionTable::standard())
}

/// Compares two runs, aligning benchmarks and metrics by name union.
///
/// Fails when the runs share no benchmark name: there is nothing meaningful
/// to report a delta against.
pub fn compare_runs_with(
    before: &BenchmarkRun,
    after: &BenchmarkRun,
    directions: &DirectionTable,
) -> Result<ComparisonReport, BenchVaultError> {
    let mut names: BTreeSet<&str> = before.measurements().keys().map(String::as_str).collect();
    names.extend(after.measurements().keys().map(String::as_str));
    if names.is_empty() {
        return Err(BenchVaultError::comparison("nothing to compare"));
    }
    if !names
        .iter()
        .any(|name| before.get(name).is_some() && after.get(name).is_some())
    {
        return Err(BenchVaultError::comparison(
            "no overlapping benchmark names",
        ));
    }

    let mut rows = Vec::new();
    for name in names {
        match (before.get(name), after.get(name)) {
            (Some(measurement), None) => {
                for key in sorted_keys(&measurement.metrics) {
                    rows.push(ComparisonRow {
                        name: name.to_string(),
                        metric: key.to_string(),
                        before: measurement.metric(key),
                        after: None,
                        delta: Delta::Removed,
                        improved: None,
                    });
                }
            }
            (None, Some(measurement)) => {
                for key in sorted_keys(&measurement.metrics) {
                    rows.push(ComparisonRow {
                        name: name.to_string(),
                        metric: key.to_string(),
                        before: None,
                        after: measurement.metric(key),
                        delta: Delta::Added,
                        improved: None,
                    });
                }
            }
            (Some(left), Some(right)) => {
                let mut keys: BTreeSet<&str> =
                    left.metrics.keys().map(String::as_str).collect();
                keys.extend(right.metrics.keys().map(String::as_str));
                for key in keys {
                    rows.push(aligned_row(
                        name,
                        key,
                        left.metric(key),
                        right.metric(key),
                        directions,
                    ));
                }
            }
            (None, None) => unreachable!("name came from the union of both runs"),
        }
    }
    Ok(ComparisonReport { rows })
}

fn aligned_row(
    name: &str,
    metric: &str,
    before: Option<f64>,
    after: Option<f64>,
    directions: &DirectionTable,
) -> ComparisonRow {
    let delta = match (before, after) {
        (Some(b), Some(a)) => delta_between(b, a),
        (Some(_), None) => Delta::Removed,
        (None, Some(_)) => Delta::Added,
        (None, None) => unreachable!("metric key came from the union of both sides"),
    };
    let improved = improvement(&delta, directions.direction_for(metric));
    ComparisonRow {
        name: name.to_string(),
        metric: metric.to_string(),
        before,
        after,
        delta,
        improved,
    }
}

fn delta_between(before: f64, after: f64) -> Delta {
    if before == 0.0 {
        if after == 0.0 {
            Delta::Percent(0.0)
        } else {
            Delta::BeforeZero
        }
    } else {
        Delta::Percent((after - before) / before * 100.0)
    }
}

fn improvement(delta: &Delta, direction: MetricDirection) -> Option<bool> {
    match delta {
        Delta::Percent(percent) if *percent != 0.0 => Some(match direction {
            MetricDirection::LowerIsBetter => *percent < 0.0,
            MetricDirection::HigherIsBetter => *percent > 0.0,
        }),
        _ => None,
    }
}

fn sorted_keys(metrics: &AHashMap<String, f64>) -> Vec<&str> {
    let mut keys: Vec<&str> = metrics.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
