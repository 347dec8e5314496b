use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::BenchVaultError, schema::ensure_schema};

/// One stored upload: raw content plus the commit it was produced at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRun {
    pub id: i64,
    pub commit: String,
    pub content: String,
    pub created_at: i64,
}

/// Listing entry without the content blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub id: i64,
    pub commit: String,
    pub created_at: i64,
}

/// Persistence contract consumed by the service.
///
/// Implementations own durability, indexing and pagination; the comparison
/// engine only ever needs `find_run` to hand it two immutable blobs.
pub trait RunStore {
    fn create_run(&self, content: &str, commit: &str) -> Result<i64, BenchVaultError>;

    /// Fails with the not-found error kind when no run has `id`.
    fn find_run(&self, id: i64) -> Result<StoredRun, BenchVaultError>;

    /// Runs created at or before `before`, newest first, at most `limit`.
    fn list_runs(&self, before: i64, limit: usize) -> Result<Vec<RunSummary>, BenchVaultError>;
}

/// SQLite-backed run store, file or in-memory.
pub struct SqliteRunStore {
    conn: Mutex<Connection>,
}

impl SqliteRunStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BenchVaultError> {
        let conn =
            Connection::open(path).map_err(|e| BenchVaultError::connection(e.to_string()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, BenchVaultError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| BenchVaultError::connection(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, BenchVaultError> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl RunStore for SqliteRunStore {
    fn create_run(&self, content: &str, commit: &str) -> Result<i64, BenchVaultError> {
        validate_run(content, commit)?;
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO bench_runs(commit_sha, content, created_at) VALUES(?1, ?2, ?3)",
            params![commit, content, now_unix()],
        )
        .map_err(|e| BenchVaultError::query(e.to_string()))?;
        let id = conn.last_insert_rowid();
        debug!(id, commit, "stored benchmark run");
        Ok(id)
    }

    fn find_run(&self, id: i64) -> Result<StoredRun, BenchVaultError> {
        self.conn
            .lock()
            .query_row(
                "SELECT id, commit_sha, content, created_at FROM bench_runs WHERE id=?1",
                params![id],
                |row| row_to_run(row),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => {
                    BenchVaultError::not_found(format!("run {id}"))
                }
                other => BenchVaultError::query(other.to_string()),
            })
    }

    fn list_runs(&self, before: i64, limit: usize) -> Result<Vec<RunSummary>, BenchVaultError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(
                "SELECT id, commit_sha, created_at FROM bench_runs \
                 WHERE created_at <= ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
            )
            .map_err(|e| BenchVaultError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params![before, limit as i64], |row| row_to_summary(row))
            .map_err(|e| BenchVaultError::query(e.to_string()))?;
        let mut summaries = Vec::new();
        for summary in rows {
            summaries.push(summary.map_err(|e| BenchVaultError::query(e.to_string()))?);
        }
        Ok(summaries)
    }
}

/// Seconds since the unix epoch; the timestamp stored with each run.
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn row_to_run(row: &rusqlite::Row<'_>) -> Result<StoredRun, rusqlite::Error> {
    Ok(StoredRun {
        id: row.get(0)?,
        commit: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> Result<RunSummary, rusqlite::Error> {
    Ok(RunSummary {
        id: row.get(0)?,
        commit: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn validate_run(content: &str, commit: &str) -> Result<(), BenchVaultError> {
    if content.trim().is_empty() {
        return Err(BenchVaultError::invalid_input("content must be set"));
    }
    if commit.trim().is_empty() {
        return Err(BenchVaultError::invalid_input("commit must be set"));
    }
    Ok(())
}
