use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// A missing file is always writable; an existing one requires the operator
/// to confirm the overwrite.
pub fn ensure_writable(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    warning(format!("El archivo '{}' ya existe.", path.display()));

    print!("¿Sobrescribir? [s/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "s" || ans == "si" || ans == "y" {
        info("El archivo existente será sobrescrito.");
        Ok(())
    } else {
        Err(AppError::Export(
            "exportación cancelada: no se sobrescribió el archivo".to_string(),
        ))
    }
}
