//! Today's records panel with the header stats bar.

use crate::app::App;
use crate::core::reports::today_summary;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::date::today;
use crate::utils::money::format_cop;
use crate::utils::table::Table;

pub fn handle(app: &mut App) -> AppResult<()> {
    header("Registros de hoy");

    let s = today_summary(&app.ledger, app.roster.len(), today());
    println!(
        "Empleados: {}   Entradas hoy: {}   Pago hoy: {}",
        s.workers_enrolled,
        s.entries_today,
        format_cop(s.amount_today)
    );
    println!();

    let todays = app.ledger.day_entries(today());
    if todays.is_empty() {
        println!("No hay registros hoy");
        return Ok(());
    }

    let mut table = Table::new(&[
        "Hora", "Nombre", "ID", "Ciclo", "Nivel", "Actividad", "Horas", "Valor",
    ]);
    for e in &todays {
        table.add_row(vec![
            e.time.clone(),
            e.employee_name.clone(),
            e.employee_id.clone(),
            colorize_optional(e.ciclo_label()),
            e.nivel.clone(),
            e.activity.clone(),
            format!("{} hrs", e.hours),
            format_cop(e.valor_jornal),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
