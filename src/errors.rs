//! Unified application error type.
//! All modules (db, core, export, sync, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Slot document error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid embedding: expected {expected} values, got {got}")]
    InvalidEmbedding { expected: usize, got: usize },

    #[error("No face detected in capture")]
    NoFaceDetected,

    #[error("Worker id already enrolled: {0}")]
    DuplicateWorker(String),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Activity '{activity}' does not belong to level {level}")]
    UnknownActivity { level: u8, activity: String },

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid month filter (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Sync errors (logged, never fatal to a check-in)
    // ---------------------------
    #[error("Sync error: {0}")]
    Sync(String),
}

pub type AppResult<T> = Result<T, AppError>;
