use rusqlite::Connection;

use crate::errors::BenchVaultError;

pub fn ensure_schema(conn: &Connection) -> Result<(), BenchVaultError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bench_runs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            commit_sha TEXT NOT NULL,
            content    TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_runs_created ON bench_runs(created_at);
        "#,
    )
    .map_err(|e| BenchVaultError::schema(e.to_string()))?;
    Ok(())
}
