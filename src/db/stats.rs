use crate::db::pool::DbPool;
use crate::db::slots::{SLOT_WORKDAYS, SLOT_WORKERS, load_workdays, load_workers, slot_updated_at};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Print a summary of the store file and its slot documents.
pub fn print_store_info(pool: &mut DbPool, store_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(store_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{CYAN}• Archivo:{RESET} {YELLOW}{store_path}{RESET}");
    println!("{CYAN}• Tamaño:{RESET} {file_mb:.2} MB");

    let workers = load_workers(&pool.conn)?;
    let entries = load_workdays(&pool.conn)?;

    println!("{CYAN}• Empleados:{RESET} {GREEN}{}{RESET}", workers.len());
    println!("{CYAN}• Jornadas:{RESET} {GREEN}{}{RESET}", entries.len());

    let oplog_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM oplog", [], |row| row.get(0))?;
    println!("{CYAN}• Operaciones en el log:{RESET} {oplog_rows}");

    for (label, slot) in [("empleados", SLOT_WORKERS), ("jornadas", SLOT_WORKDAYS)] {
        let when = slot_updated_at(&pool.conn, slot)?
            .unwrap_or_else(|| format!("{GREY}--{RESET}"));
        println!("{CYAN}• Última escritura ({label}):{RESET} {when}");
    }

    println!();
    Ok(())
}
