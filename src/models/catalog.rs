//! Static level → activity catalog.
//!
//! Six levels, each with an ordered list of permissible activity labels.
//! Reference data only: not editable at runtime, not stored in the slot
//! documents.

use crate::errors::{AppError, AppResult};

pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 6;

const LEVEL_1: &[&str] = &[
    "Preparación de terreno",
    "Armado de capachos y sustratos",
    "Entrada de capachos",
    "Lavado y desinfección de coco",
    "Instalación y adecuación de riego",
    "Ajuste y mantenimiento de riego",
    "Preparación y mezcla de sustrato 4000",
    "Mezcla y preparación de sustrato",
    "Montaje y mantenimiento de rampas",
    "Control de humedad y ventilación",
];

const LEVEL_2: &[&str] = &[
    "Calado y trazado de siembra",
    "Siembra inicial",
    "Siembra de refuerzo",
    "Transplante de machos",
    "Reubicación de capachos",
    "Organización de plantas",
    "Organización de invernaderos",
    "Ajuste de riego siembra nueva",
];

const LEVEL_3: &[&str] = &[
    "Control fitosanitario integral",
    "Control de Botritis",
    "Fumigación y control de plagas",
    "Fumigación de machos",
    "Eliminación de enfermedades",
    "Desmalezado",
    "Podas de mantenimiento",
    "Poda de bajos",
    "Entutorado de plantas",
    "Aporque y sostenimiento de machos",
    "Limpieza general del cultivo",
    "Supervisión y riego",
];

const LEVEL_4: &[&str] = &[
    "Polinización controlada",
    "Polinización y control de anteras",
    "Supervisión de polinización",
    "Recolección de polen",
    "Preparación zona libre expo",
];

const LEVEL_5: &[&str] = &[
    "Cosecha general",
    "Cosecha y trillado",
    "Cosecha y siembra simultánea",
    "Aventado y trillado de semilla",
    "Secado y trillado de producto",
    "Lavado y limpieza de semilla",
    "Selección de semilla",
    "Clasificación de semilla",
    "Reubicación de bultos y empaque",
    "Control de calidad post-cosecha",
];

const LEVEL_6: &[&str] = &[
    "Limpieza y desinfección de invernadero",
    "Organización de capachos",
    "Registro de datos y organización",
    "Supervisión general",
    "Libre exposición y control ambiental",
];

/// Activities permitted for a level (1..=6).
pub fn activities_for_level(level: u8) -> AppResult<&'static [&'static str]> {
    match level {
        1 => Ok(LEVEL_1),
        2 => Ok(LEVEL_2),
        3 => Ok(LEVEL_3),
        4 => Ok(LEVEL_4),
        5 => Ok(LEVEL_5),
        6 => Ok(LEVEL_6),
        other => Err(AppError::UnknownLevel(other.to_string())),
    }
}

/// Display label of a level, as stored on entries ("Nivel 3").
pub fn level_label(level: u8) -> String {
    format!("Nivel {level}")
}

/// Check that an activity belongs to the catalog of the given level.
pub fn validate_activity(level: u8, activity: &str) -> AppResult<()> {
    let list = activities_for_level(level)?;
    if list.contains(&activity) {
        Ok(())
    } else {
        Err(AppError::UnknownActivity {
            level,
            activity: activity.to_string(),
        })
    }
}
