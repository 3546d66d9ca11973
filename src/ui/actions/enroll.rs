//! Worker enrollment: identity, one face capture, signature.

use crate::app::App;
use crate::core::checkin::{FileProbeSource, capture_enrollment};
use crate::errors::AppResult;
use crate::models::Worker;
use crate::ui::messages::{prompt, success, warning};
use std::fs;
use std::path::Path;

pub fn handle(app: &mut App) -> AppResult<()> {
    let Some(id) = prompt("ID del empleado")? else {
        return Ok(());
    };
    let Some(name) = prompt("Nombre")? else {
        return Ok(());
    };

    if id.is_empty() || name.is_empty() {
        warning("Completa todos los campos");
        return Ok(());
    }
    if app.roster.find(&id).is_some() {
        warning("Ya existe un empleado con ese ID");
        return Ok(());
    }

    let Some(frames_path) = prompt("Archivo de captura (JSON de frames)")? else {
        return Ok(());
    };
    let mut source = FileProbeSource::open(Path::new(&frames_path))?;
    let descriptor = capture_enrollment(&mut source)?;

    let Some(signature_path) = prompt("Archivo de firma (data URL)")? else {
        return Ok(());
    };
    if signature_path.is_empty() {
        warning("Captura o carga la firma del empleado");
        return Ok(());
    }
    let signature = fs::read_to_string(&signature_path)?.trim().to_string();

    app.enroll(Worker::new(id, name.clone(), descriptor, Some(signature)))?;
    success(format!("Empleado {name} registrado exitosamente con firma digital"));
    Ok(())
}
