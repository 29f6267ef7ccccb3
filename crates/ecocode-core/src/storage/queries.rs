//! Settings table queries

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Get a setting value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}

/// Set a setting value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::storage::run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_settings() {
        let conn = setup_db();

        set_setting(&conn, "ecocode.layout.chat_panel_size", "30").unwrap();

        let value = get_setting(&conn, "ecocode.layout.chat_panel_size").unwrap();
        assert_eq!(value, Some("30".to_string()));

        let none = get_setting(&conn, "nonexistent").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_settings_upsert() {
        let conn = setup_db();

        set_setting(&conn, "size", "30").unwrap();
        set_setting(&conn, "size", "42.5").unwrap();
        set_setting(&conn, "other", "x").unwrap();

        assert_eq!(get_setting(&conn, "size").unwrap().as_deref(), Some("42.5"));
        assert_eq!(get_setting(&conn, "other").unwrap().as_deref(), Some("x"));

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 2);
    }
}
