//! PDF report of the full ledger, newest first, with signature images.

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, PdfRow};
use crate::models::WorkdayEntry;
use crate::utils::money::format_cop;
use std::collections::HashMap;
use std::io;
use std::path::Path;

const TITLE: &str = "REPORTE DE JORNALES AGRÍCOLAS";

const HEADERS: [&str; 11] = [
    "#", "ID", "Nombre", "Ciclo", "Niv", "Labor", "Fecha", "Hora", "Hrs", "Valor", "Firma",
];

pub fn export_pdf(entries: &[WorkdayEntry], roster: &Roster, path: &Path) -> AppResult<()> {
    let mut pdf = PdfManager::new();

    // one embedded image per worker, shared across that worker's rows
    let mut signatures: HashMap<&str, Option<usize>> = HashMap::new();
    for w in roster.workers() {
        let idx = w.signature.as_deref().and_then(|s| pdf.add_signature(s));
        signatures.insert(w.id.as_str(), idx);
    }

    let mut sorted: Vec<&WorkdayEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let rows: Vec<PdfRow> = sorted
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let signature = signatures.get(e.employee_id.as_str()).copied().flatten();
            let firma_cell = if signature.is_some() {
                String::new()
            } else {
                "Sin firma".to_string()
            };
            PdfRow {
                cells: vec![
                    (i + 1).to_string(),
                    e.employee_id.clone(),
                    e.employee_name.clone(),
                    e.ciclo_label().to_string(),
                    e.nivel.replace("Nivel ", "N"),
                    e.activity.clone(),
                    e.date.clone(),
                    e.time.clone(),
                    format!("{}h", e.hours),
                    format_cop(e.valor_jornal),
                    firma_cell,
                ],
                signature,
            }
        })
        .collect();

    pdf.write_table(TITLE, &HEADERS, &rows);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
