//! Commit-indexed storage and comparison of raw benchmark output.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod cli;
pub mod compare;
pub mod dataset;
pub mod errors;
pub mod format;
pub mod gate;
pub mod parse;
pub mod schema;
pub mod service;
pub mod store;
pub mod verify;

pub use crate::compare::{
    ComparisonReport, ComparisonRow, Delta, DirectionTable, MetricDirection, compare_runs,
    compare_runs_with,
};
pub use crate::errors::BenchVaultError;
pub use crate::format::render_report;
pub use crate::gate::{GateConfig, GateOutcome, RegressionGate};
pub use crate::parse::{BenchmarkRun, Measurement, parse_run};
pub use crate::service::BenchService;
pub use crate::store::{RunStore, RunSummary, SqliteRunStore, StoredRun};
pub use crate::verify::{AcceptAllVerifier, SignatureVerifier};
