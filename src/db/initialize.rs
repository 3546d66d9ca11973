use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the store schema exists.
///
/// Two tables: `slots` holds the full worker and workday collections, each
/// as one JSON document rewritten in full on every mutation; `oplog` records
/// every mutating operation and sync attempt.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            name       TEXT PRIMARY KEY,
            document   TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
