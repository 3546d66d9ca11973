//! Report panels: summary plus the three metric reducers.
//!
//! Each panel prints both money figures (nominal and stored amounts); see
//! the reports module for why they can diverge.

use crate::app::App;
use crate::core::reports::{
    MetricRow, activity_metrics, level_metrics, report_summary, worker_metrics,
};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::money::format_cop;

const BAR_WIDTH: usize = 30;

fn print_panel(title: &str, rows: &[MetricRow]) {
    println!("\n{title}");
    if rows.is_empty() {
        println!("  No hay datos");
        return;
    }

    let label_w = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    for r in rows {
        let filled = (r.bar_pct / 100.0 * BAR_WIDTH as f64).round() as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
        println!(
            "  {:<label_w$}  {bar} {} — nominal {} / montos {}",
            r.label,
            r.count,
            format_cop(r.nominal_total),
            format_cop(r.amount_total),
        );
    }
}

pub fn handle(app: &mut App) -> AppResult<()> {
    header("Reportes");

    let s = report_summary(&app.ledger);
    println!(
        "Jornadas totales: {}   Actividades distintas: {}",
        s.total_entries, s.distinct_activities
    );
    println!(
        "Total pagado (nominal): {}   Total pagado (montos): {}",
        format_cop(s.nominal_total),
        format_cop(s.amount_total)
    );

    print_panel("Top actividades", &activity_metrics(&app.ledger));
    print_panel("Top empleados", &worker_metrics(&app.ledger));
    print_panel("Jornadas por nivel", &level_metrics(&app.ledger));
    println!();

    Ok(())
}
