pub mod csv;
mod fs_utils;
mod pdf;
mod pdf_export;

pub(crate) use fs_utils::ensure_writable;
pub use pdf_export::export_pdf;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for every export surface.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("Exportación {label} completada: {}", path.display()));
}
