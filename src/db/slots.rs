//! Named full-document slots.
//!
//! Two slots exist: `workers` and `workdays`, mirroring the key-value pairs
//! the original front-end kept in its browser store. Each write replaces the
//! whole document; a missing slot means an empty collection, not an error.

use crate::errors::AppResult;
use crate::models::{Worker, WorkdayEntry};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const SLOT_WORKERS: &str = "workers";
pub const SLOT_WORKDAYS: &str = "workdays";

fn read_slot(conn: &Connection, name: &str) -> AppResult<Option<String>> {
    let doc: Option<String> = conn
        .query_row(
            "SELECT document FROM slots WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(doc)
}

fn write_slot(conn: &Connection, name: &str, document: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO slots (name, document, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET document = ?2, updated_at = ?3",
    )?;
    stmt.execute(params![name, document, now])?;
    Ok(())
}

pub fn load_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    match read_slot(conn, SLOT_WORKERS)? {
        None => Ok(Vec::new()),
        Some(doc) => Ok(serde_json::from_str(&doc)?),
    }
}

pub fn save_workers(conn: &Connection, workers: &[Worker]) -> AppResult<()> {
    let doc = serde_json::to_string(workers)?;
    write_slot(conn, SLOT_WORKERS, &doc)
}

pub fn load_workdays(conn: &Connection) -> AppResult<Vec<WorkdayEntry>> {
    match read_slot(conn, SLOT_WORKDAYS)? {
        None => Ok(Vec::new()),
        Some(doc) => Ok(serde_json::from_str(&doc)?),
    }
}

pub fn save_workdays(conn: &Connection, entries: &[WorkdayEntry]) -> AppResult<()> {
    let doc = serde_json::to_string(entries)?;
    write_slot(conn, SLOT_WORKDAYS, &doc)
}

/// Last write time of a slot, if it was ever written.
pub fn slot_updated_at(conn: &Connection, name: &str) -> AppResult<Option<String>> {
    let ts: Option<String> = conn
        .query_row(
            "SELECT updated_at FROM slots WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(ts)
}
