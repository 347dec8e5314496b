use tracing::info;

use crate::compare::{ComparisonReport, compare_runs};
use crate::errors::BenchVaultError;
use crate::format::render_report;
use crate::parse::parse_run;
use crate::store::{RunStore, RunSummary, now_unix};
use crate::verify::SignatureVerifier;

/// Uploads shorter than this are rejected as dummy content.
const MIN_CONTENT_BYTES: usize = 10;

/// Store, verifier and engine composed behind one surface.
///
/// Both collaborators are injected through their traits, so a transport
/// layer can swap persistence or signature checking without touching the
/// parsing and comparison core.
pub struct BenchService<S, V> {
    store: S,
    verifier: V,
    secret: String,
}

impl<S, V> BenchService<S, V> {
    pub fn new<T: Into<String>>(store: S, verifier: V, secret: T) -> Self {
        Self {
            store,
            verifier,
            secret: secret.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, V> BenchService<S, V>
where
    S: RunStore,
    V: SignatureVerifier,
{
    /// Admits and persists one raw upload, returning the new run id.
    ///
    /// Admission order: content present, commit present, signature accepted,
    /// content long enough to be real benchmark output.
    pub fn upload(
        &self,
        content: &str,
        signature: &str,
        commit: &str,
    ) -> Result<i64, BenchVaultError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BenchVaultError::invalid_input("content is required"));
        }
        let commit = commit.trim();
        if commit.is_empty() {
            return Err(BenchVaultError::invalid_input("commit is required"));
        }
        if !self
            .verifier
            .verify(signature, content.as_bytes(), &self.secret)
        {
            return Err(BenchVaultError::unauthorized("content signature rejected"));
        }
        if content.len() < MIN_CONTENT_BYTES {
            return Err(BenchVaultError::invalid_input(
                "content too short to be benchmark output",
            ));
        }
        let id = self.store.create_run(content, commit)?;
        info!(id, commit, "accepted benchmark upload");
        Ok(id)
    }

    /// Raw content of one stored run.
    pub fn show(&self, id: i64) -> Result<String, BenchVaultError> {
        Ok(self.store.find_run(id)?.content)
    }

    /// Most recent run summaries, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<RunSummary>, BenchVaultError> {
        self.store.list_runs(now_unix(), limit)
    }

    /// Fetches and parses both runs, then aligns them into a report.
    pub fn compare_report(
        &self,
        before_id: i64,
        after_id: i64,
    ) -> Result<ComparisonReport, BenchVaultError> {
        let before = self.store.find_run(before_id)?;
        let after = self.store.find_run(after_id)?;
        let before_run = parse_run(&before.content)?;
        let after_run = parse_run(&after.content)?;
        compare_runs(&before_run, &after_run)
    }

    /// The full fetch, parse, compare, render pipeline.
    pub fn compare(&self, before_id: i64, after_id: i64) -> Result<Vec<u8>, BenchVaultError> {
        let report = self.compare_report(before_id, after_id)?;
        Ok(render_report(&report))
    }
}
