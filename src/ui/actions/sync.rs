//! Manual push of the whole ledger to the collector.

use crate::app::App;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(app: &mut App) -> AppResult<()> {
    if app.sync.is_none() {
        warning("Sincronización deshabilitada (configura sync_url y sync_enabled)");
        return Ok(());
    }
    if app.ledger.is_empty() {
        warning("No hay registros para sincronizar");
        return Ok(());
    }

    info(format!("Enviando {} registros al colector...", app.ledger.len()));
    let entries = app.ledger.snapshot();
    app.push_best_effort(&entries);
    Ok(())
}
