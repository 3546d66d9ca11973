//! CSV export surfaces.
//!
//! Column orders and headers match the documents the original tool
//! downloaded; text fields are quoted, numeric fields are not.

use crate::core::reports::ReportSummary;
use crate::models::WorkdayEntry;
use crate::utils::money::format_cop;
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

fn writer(path: &Path) -> std::io::Result<csv::Writer<std::fs::File>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(path)
        .map_err(std::io::Error::other)
}

/// Writer for the report surface, whose banner and totals records have
/// fewer fields than the data rows.
fn flexible_writer(path: &Path) -> std::io::Result<csv::Writer<std::fs::File>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .flexible(true)
        .from_path(path)
        .map_err(std::io::Error::other)
}

/// Today's records: `Hora,Nombre,ID,Ciclo,Nivel,Actividad,Horas,Valor`.
pub fn write_today_csv(path: &Path, entries: &[&WorkdayEntry]) -> std::io::Result<()> {
    let mut wtr = writer(path)?;

    wtr.write_record([
        "Hora", "Nombre", "ID", "Ciclo", "Nivel", "Actividad", "Horas", "Valor",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.time.clone(),
            e.employee_name.clone(),
            e.employee_id.clone(),
            e.ciclo_label().to_string(),
            e.nivel.clone(),
            e.activity.clone(),
            e.hours.to_string(),
            e.valor_jornal.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Full ledger: `Empleado,ID,Ciclo,Nivel,Actividad,Fecha,Horas,Valor`.
pub fn write_workdays_csv(path: &Path, entries: &[WorkdayEntry]) -> std::io::Result<()> {
    let mut wtr = writer(path)?;

    wtr.write_record([
        "Empleado", "ID", "Ciclo", "Nivel", "Actividad", "Fecha", "Horas", "Valor",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.employee_name.clone(),
            e.employee_id.clone(),
            e.ciclo_label().to_string(),
            e.nivel.clone(),
            e.activity.clone(),
            e.date.clone(),
            e.hours.to_string(),
            e.valor_jornal.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Detailed report with the trailing totals section. Both totals figures are
/// written: the nominal one (count × flat jornal) and the stored-amount sum.
pub fn write_report_csv(
    path: &Path,
    entries: &[WorkdayEntry],
    summary: &ReportSummary,
) -> std::io::Result<()> {
    let mut wtr = flexible_writer(path)?;

    wtr.write_record(["REPORTE COMPLETO DE JORNADAS"])?;
    wtr.write_record([""])?;
    wtr.write_record(["Empleado", "ID", "Nivel", "Actividad", "Fecha", "Hora", "Valor"])?;

    for e in entries {
        wtr.write_record(&[
            e.employee_name.clone(),
            e.employee_id.clone(),
            e.nivel.clone(),
            e.activity.clone(),
            e.date.clone(),
            e.time.clone(),
            e.valor_jornal.to_string(),
        ])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["TOTAL JORNADAS", &summary.total_entries.to_string()])?;
    wtr.write_record(["TOTAL PAGADO (nominal)", &format_cop(summary.nominal_total)])?;
    wtr.write_record(["TOTAL PAGADO (montos)", &format_cop(summary.amount_total)])?;

    wtr.flush()?;
    Ok(())
}
