//! Export submenu: CSV surfaces and the PDF report.

use crate::app::App;
use crate::core::reports::report_summary;
use crate::errors::AppResult;
use crate::export::csv::{write_report_csv, write_today_csv, write_workdays_csv};
use crate::export::{ensure_writable, export_pdf, notify_export_success};
use crate::ui::messages::{prompt, warning};
use crate::utils::date::today;
use std::path::Path;

pub fn handle(app: &mut App) -> AppResult<()> {
    println!("1) Registros de hoy (CSV)");
    println!("2) Jornadas completas (CSV)");
    println!("3) Reporte detallado (CSV)");
    println!("4) Reporte PDF");

    let Some(choice) = prompt("Formato")? else {
        return Ok(());
    };
    let Some(file) = prompt("Archivo de salida")? else {
        return Ok(());
    };
    let path = Path::new(&file);
    ensure_writable(path)?;

    match choice.as_str() {
        "1" => {
            let todays = app.ledger.day_entries(today());
            if todays.is_empty() {
                warning("No hay registros para exportar");
                return Ok(());
            }
            write_today_csv(path, &todays)?;
            notify_export_success("CSV", path);
        }
        "2" => {
            if app.ledger.is_empty() {
                warning("No hay jornadas para exportar");
                return Ok(());
            }
            write_workdays_csv(path, app.ledger.entries())?;
            notify_export_success("CSV", path);
        }
        "3" => {
            if app.ledger.is_empty() {
                warning("No hay datos para exportar");
                return Ok(());
            }
            let summary = report_summary(&app.ledger);
            write_report_csv(path, app.ledger.entries(), &summary)?;
            notify_export_success("CSV", path);
        }
        "4" => {
            if app.ledger.is_empty() {
                warning("No hay datos para generar el reporte PDF");
                return Ok(());
            }
            export_pdf(app.ledger.entries(), &app.roster, path)?;
        }
        other => {
            warning(format!("Formato desconocido: {other}"));
            return Ok(());
        }
    }

    app.log_op("export", &file, "exportación completada");
    Ok(())
}
