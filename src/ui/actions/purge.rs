//! Destructive operations, each behind two independent confirmations.
//! The full wipe additionally requires typing the exact phrase.

use crate::app::App;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, prompt, success, warning};
use crate::utils::date::today;
use crate::utils::money::format_cop;

const WIPE_PHRASE: &str = "ELIMINAR";

fn purge_today(app: &mut App) -> AppResult<()> {
    let count = app.ledger.day_entries(today()).len();
    if count == 0 {
        info("No hay registros hoy");
        return Ok(());
    }

    warning(format!("Se eliminarán los {count} registros de hoy."));
    if !confirm("¿Eliminar todos los registros de hoy?")?
        || !confirm("ÚLTIMA CONFIRMACIÓN: ¿estás completamente seguro?")?
    {
        info("Eliminación cancelada");
        return Ok(());
    }

    let removed = app.purge_today()?;
    success(format!("Registros eliminados: {removed}"));
    Ok(())
}

fn purge_workers(app: &mut App) -> AppResult<()> {
    let count = app.roster.len();
    if count == 0 {
        info("No hay empleados para eliminar");
        return Ok(());
    }

    warning(format!(
        "Se eliminarán los {count} empleados. Esta acción no se puede deshacer."
    ));
    if !confirm("¿Eliminar todos los empleados?")?
        || !confirm("ÚLTIMA CONFIRMACIÓN: ¿estás completamente seguro?")?
    {
        info("Eliminación cancelada");
        return Ok(());
    }

    let removed = app.clear_workers()?;
    success(format!("Empleados eliminados: {removed}"));
    Ok(())
}

fn wipe_all(app: &mut App) -> AppResult<()> {
    let workers = app.roster.len();
    let entries = app.ledger.len();
    let total: i64 = app.ledger.entries().iter().map(|e| e.valor_jornal).sum();

    if workers == 0 && entries == 0 {
        info("No hay datos para eliminar");
        return Ok(());
    }

    warning("ADVERTENCIA CRÍTICA: eliminación permanente de todos los datos");
    println!("  Empleados: {workers}");
    println!("  Jornadas:  {entries}");
    println!("  Monto:     {}", format_cop(total));
    println!("  Se perderán los reconocimientos faciales, las firmas y el historial de pagos.");

    if !confirm("¿Estás COMPLETAMENTE seguro?")? {
        info("Eliminación cancelada");
        return Ok(());
    }

    let Some(typed) = prompt(&format!("Escribe la palabra {WIPE_PHRASE} para confirmar"))? else {
        return Ok(());
    };
    if typed != WIPE_PHRASE {
        warning("Palabra incorrecta. Eliminación cancelada por seguridad.");
        return Ok(());
    }

    let (w, e) = app.wipe_all()?;
    success(format!("Datos eliminados: {w} empleados, {e} jornadas"));
    Ok(())
}

pub fn handle(app: &mut App) -> AppResult<()> {
    println!("1) Eliminar registros de hoy");
    println!("2) Eliminar todos los empleados");
    println!("3) Eliminar TODOS los datos");

    let Some(choice) = prompt("Opción")? else {
        return Ok(());
    };

    match choice.as_str() {
        "1" => purge_today(app),
        "2" => purge_workers(app),
        "3" => wipe_all(app),
        other => {
            warning(format!("Opción desconocida: {other}"));
            Ok(())
        }
    }
}
