//! Settings persistence
//!
//! A single SQLite file under the data directory holds the `settings` table.
//! [`Storage`] is the on-disk [`KeyValueStore`]; [`MemoryStore`] stands in when
//! the file cannot be opened.

mod kv;
mod migrations;
mod queries;

pub use kv::{KeyValueStore, MemoryStore};
pub use migrations::run_migrations;
pub use queries::{get_setting, set_setting};

use crate::error::Result;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::info;

/// File name of the settings database inside the data directory
pub const DB_FILE_NAME: &str = "ecocode.db";

/// SQLite-backed settings store
pub struct Storage {
    pool: Pool<SqliteConnectionManager>,
}

impl Storage {
    /// Open (or create) the settings database in `data_dir`
    pub fn new_with_path(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join(DB_FILE_NAME);
        let pool = Pool::builder()
            .max_size(2)
            .build(SqliteConnectionManager::file(&db_path))?;
        let conn = pool.get()?;
        run_migrations(&conn)?;

        info!("Settings store opened at {:?}", db_path);
        Ok(Self { pool })
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_nested_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let storage = Storage::new_with_path(&nested).unwrap();
        storage.set("theme", "dark").unwrap();

        assert!(nested.join(DB_FILE_NAME).exists());
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_open_on_a_file_fails() {
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"").unwrap();

        assert!(matches!(Storage::new_with_path(&blocked), Err(Error::Io(_))));
    }
}
