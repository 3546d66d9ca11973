//! Workdays panel: grouped view, filters, guarded filtered deletion.

use crate::app::App;
use crate::core::ledger::EntryFilter;
use crate::errors::{AppError, AppResult};
use crate::models::WorkdayEntry;
use crate::ui::messages::{confirm, header, info, prompt, success, warning};
use crate::utils::colors::{colorize_optional, colorize_signature};
use crate::utils::date::parse_month;
use crate::utils::money::format_cop;
use crate::utils::table::Table;
use std::collections::HashSet;

fn entry_row(e: &WorkdayEntry, signature: Option<bool>) -> Vec<String> {
    let mut row = vec![
        e.employee_name.clone(),
        e.employee_id.clone(),
        colorize_optional(e.ciclo_label()),
        e.nivel.clone(),
        e.activity.clone(),
        e.date.clone(),
        format!("{} hrs", e.hours),
        format_cop(e.valor_jornal),
    ];
    if let Some(present) = signature {
        row.push(colorize_signature(present));
    }
    row
}

fn print_entries(app: &App, entries: &[&WorkdayEntry]) {
    let mut table = Table::new(&[
        "Empleado", "ID", "Ciclo", "Nivel", "Actividad", "Fecha", "Horas", "Valor", "Firma",
    ]);
    for e in entries {
        let signature = app
            .roster
            .find(&e.employee_id)
            .map(|w| w.signature.is_some())
            .unwrap_or(false);
        table.add_row(entry_row(e, Some(signature)));
    }
    print!("{}", table.render());

    let total: i64 = entries.iter().map(|e| e.valor_jornal).sum();
    println!("Jornadas: {}   Acumulado: {}", entries.len(), format_cop(total));
}

fn read_filter(app: &App) -> AppResult<Option<EntryFilter>> {
    let months = app.ledger.distinct_months();
    let activities = app.ledger.distinct_activities();

    let Some(worker) = prompt("Filtrar por ID de empleado (vacío = todos)")? else {
        return Ok(None);
    };

    if !months.is_empty() {
        println!("Meses con registros: {}", months.join(", "));
    }
    let Some(month) = prompt("Filtrar por mes YYYY-MM (vacío = todos)")? else {
        return Ok(None);
    };
    if !month.is_empty() && parse_month(&month).is_none() {
        return Err(AppError::InvalidMonth(month));
    }

    if !activities.is_empty() {
        println!("Actividades registradas: {}", activities.join(", "));
    }
    let Some(activity) = prompt("Filtrar por actividad (vacío = todas)")? else {
        return Ok(None);
    };

    Ok(Some(EntryFilter {
        worker_id: (!worker.is_empty()).then_some(worker),
        year_month: (!month.is_empty()).then_some(month),
        activity: (!activity.is_empty()).then_some(activity),
    }))
}

fn delete_filtered(app: &mut App, filter: &EntryFilter) -> AppResult<()> {
    let filtered = app.ledger.filter(filter);
    let ids: HashSet<i64> = filtered.iter().map(|e| e.id).collect();
    let total: i64 = filtered.iter().map(|e| e.valor_jornal).sum();
    let count = filtered.len();
    drop(filtered);

    warning(format!(
        "Se eliminarán {count} jornadas ({}) PERMANENTEMENTE. Esta acción no se puede deshacer.",
        format_cop(total)
    ));
    if !confirm("¿Eliminar las jornadas filtradas?")? {
        info("Eliminación cancelada");
        return Ok(());
    }
    if !confirm("ÚLTIMA CONFIRMACIÓN: ¿estás completamente seguro?")? {
        info("Eliminación cancelada");
        return Ok(());
    }

    let removed = app.delete_entries(&ids)?;
    success(format!(
        "Jornadas eliminadas: {removed}. Jornadas restantes: {}",
        app.ledger.len()
    ));
    Ok(())
}

pub fn handle(app: &mut App) -> AppResult<()> {
    header("Jornadas");

    if app.ledger.is_empty() {
        println!("No hay jornadas registradas");
        return Ok(());
    }

    // grouped view: one block per worker, entries in ledger order
    for group in app.ledger.group_by_worker() {
        println!("\n{} ({})", group.worker_name, group.worker_id);
        print_entries(app, &group.entries);
    }
    println!();

    if !confirm("¿Aplicar filtros?")? {
        return Ok(());
    }

    let Some(filter) = read_filter(app)? else {
        return Ok(());
    };

    let filtered = app.ledger.filter(&filter);
    println!();
    if filtered.is_empty() {
        println!("No hay resultados");
        return Ok(());
    }
    print_entries(app, &filtered);
    drop(filtered);

    // deletion only offered for an actual filtered subset
    if filter.is_empty() {
        return Ok(());
    }
    delete_filtered(app, &filter)?;

    Ok(())
}
