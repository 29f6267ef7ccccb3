//! Schema versioning
//!
//! The schema version lives in SQLite's `user_version` pragma. Each entry of
//! [`SCHEMA`] upgrades the database by one version.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

const SCHEMA: &[&str] = &[
    // v1: UI settings (panel sizes and other small scalars)
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
    "#,
];

/// Bring the schema up to the latest version
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    let current = usize::try_from(current).unwrap_or(0);
    if current >= SCHEMA.len() {
        debug!("Settings schema at v{}", current);
        return Ok(());
    }

    for (idx, sql) in SCHEMA.iter().enumerate().skip(current) {
        let version = idx + 1;
        conn.execute_batch(&format!("BEGIN; {sql} PRAGMA user_version = {version}; COMMIT;"))?;
        info!("Settings schema upgraded to v{}", version);
    }
    Ok(())
}
