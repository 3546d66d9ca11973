use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write one line into the `oplog` table.
pub fn oplog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO oplog (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "enroll" | "checkin" => Colour::Green,
        "delete" | "purge" | "wipe" => Colour::Red,
        "sync" | "sync_failed" => Colour::Blue,
        "export" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Print the operation log, oldest first, with the operation colorized.
pub fn print_oplog(pool: &mut DbPool) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM oplog ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let id: i32 = row.get(0)?;
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: String = row.get(3)?;
        let message: String = row.get(4)?;

        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok((id, date, operation, target, message))
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    if entries.is_empty() {
        println!("No hay operaciones registradas");
        return Ok(());
    }

    let id_w = entries
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);
    let op_w = entries
        .iter()
        .map(|(_, _, op, target, _)| {
            if target.is_empty() {
                op.len()
            } else {
                op.len() + target.len() + 3
            }
        })
        .max()
        .unwrap_or(10)
        .min(60);

    println!("📜 Log de operaciones:\n");

    for (id, date, operation, target, message) in entries {
        let color = color_for_operation(&operation);
        let mut colored = color.paint(&operation).to_string();
        if !target.is_empty() {
            colored.push_str(&format!(" ({target})"));
        }

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

        println!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}");
    }

    Ok(())
}
