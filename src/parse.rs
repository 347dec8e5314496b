use ahash::AHashMap;
use tracing::debug;

use crate::errors::BenchVaultError;

/// First token of a measurement line must start with this, case-sensitive.
const MEASUREMENT_PREFIX: &str = "Benchmark";

/// Shortest usable line: name, iteration count, one value/unit pair.
const MIN_LINE_TOKENS: usize = 4;

/// One benchmark case's named numeric results, e.g. `ns/op` or `B/op`.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub metrics: AHashMap<String, f64>,
}

impl Measurement {
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }
}

/// All measurements parsed from one uploaded content blob.
///
/// Immutable once constructed; a later line for an already-seen benchmark
/// name fully replaces the earlier measurement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkRun {
    measurements: AHashMap<String, Measurement>,
}

impl BenchmarkRun {
    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.get(name)
    }

    pub fn measurements(&self) -> &AHashMap<String, Measurement> {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// Parses raw benchmark output into a [`BenchmarkRun`].
///
/// Lines that do not look like measurements are ignored so output that
/// interleaves progress or log text still ingests. Only an input with zero
/// usable measurement lines is an error.
pub fn parse_run(raw: &str) -> Result<BenchmarkRun, BenchVaultError> {
    let mut measurements: AHashMap<String, Measurement> = AHashMap::new();
    let mut skipped = 0usize;
    for line in raw.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match parse_measurement_line(&tokens) {
            Some(measurement) => {
                measurements.insert(measurement.name.clone(), measurement);
            }
            None => {
                if tokens
                    .first()
                    .is_some_and(|t| t.starts_with(MEASUREMENT_PREFIX))
                {
                    skipped += 1;
                }
            }
        }
    }
    if measurements.is_empty() {
        return Err(BenchVaultError::parse("no benchmark measurements found"));
    }
    debug!(
        measurements = measurements.len(),
        skipped_lines = skipped,
        "parsed benchmark run"
    );
    Ok(BenchmarkRun { measurements })
}

fn parse_measurement_line(tokens: &[&str]) -> Option<Measurement> {
    let name = *tokens.first()?;
    if !name.starts_with(MEASUREMENT_PREFIX) {
        return None;
    }
    if tokens.len() < MIN_LINE_TOKENS {
        return None;
    }
    let mut metrics = AHashMap::new();
    // Token 1 is the iteration count, informational only. Value/unit pairs
    // follow; a trailing unpaired token is dropped by chunks_exact.
    for pair in tokens[2..].chunks_exact(2) {
        let value = match pair[0].parse::<f64>() {
            Ok(value) => value,
            Err(_) => continue,
        };
        metrics.insert(pair[1].to_string(), value);
    }
    if metrics.is_empty() {
        return None;
    }
    Some(Measurement {
        name: name.to_string(),
        metrics,
    })
}
