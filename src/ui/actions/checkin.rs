//! Check-in: activity selection followed by the recognition loop.

use crate::app::App;
use crate::core::checkin::{CheckinOutcome, FileProbeSource, SelectedActivity};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::activities_for_level;
use crate::ui::messages::{info, prompt, success, warning};
use crate::utils::money::format_cop;
use std::path::Path;

fn read_selection() -> AppResult<Option<SelectedActivity>> {
    let Some(ciclo) = prompt("Ciclo")? else {
        return Ok(None);
    };

    let Some(level_raw) = prompt("Nivel (1-6)")? else {
        return Ok(None);
    };
    let level: u8 = level_raw
        .parse()
        .map_err(|_| AppError::UnknownLevel(level_raw.clone()))?;
    let activities = activities_for_level(level)?;

    println!("Actividades del nivel {level}:");
    for (i, a) in activities.iter().enumerate() {
        println!("  {}) {a}", i + 1);
    }
    let Some(act_raw) = prompt("Actividad (número)")? else {
        return Ok(None);
    };
    let act_idx: usize = act_raw
        .parse()
        .ok()
        .filter(|n| (1..=activities.len()).contains(n))
        .ok_or_else(|| AppError::UnknownActivity {
            level,
            activity: act_raw.clone(),
        })?;
    let activity = activities[act_idx - 1].to_string();

    let Some(hours_raw) = prompt("Horas")? else {
        return Ok(None);
    };
    let hours: f64 = hours_raw
        .parse()
        .map_err(|_| AppError::InvalidHours(hours_raw.clone()))?;

    let selection = SelectedActivity::new(ciclo, level, activity, hours)?;
    info(format!(
        "Valor del jornal: {} ({} hrs)",
        format_cop(selection.valor_jornal),
        selection.hours
    ));
    Ok(Some(selection))
}

pub fn handle(app: &mut App) -> AppResult<()> {
    if app.roster.is_empty() {
        warning("No hay empleados registrados");
        return Ok(());
    }

    let Some(selection) = read_selection()? else {
        return Ok(());
    };

    let Some(frames_path) = prompt("Archivo de captura (JSON de frames)")? else {
        return Ok(());
    };
    let mut source = FileProbeSource::open(Path::new(&frames_path))?;

    info("🔍 Reconocimiento activo...");
    match app.run_recognition(selection, &mut source)? {
        CheckinOutcome::Recorded(entry) => {
            success(format!("Entrada registrada para {}", entry.employee_name));
            println!("  Empleado:  {}", entry.employee_name);
            println!("  ID:        {}", entry.employee_id);
            println!("  Ciclo:     {}", entry.ciclo_label());
            println!("  Nivel:     {}", entry.nivel);
            println!("  Actividad: {}", entry.activity);
            println!("  Horas:     {} hrs", entry.hours);
            println!("  Hora:      {}", entry.time);
            println!("  Valor:     {}", format_cop(entry.valor_jornal));
        }
        CheckinOutcome::Duplicate { worker_name } => {
            warning(format!("{worker_name} ya registró entrada hoy"));
        }
        CheckinOutcome::Cancelled => {
            info("Reconocimiento terminado sin coincidencia");
        }
    }

    Ok(())
}
