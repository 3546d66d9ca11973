#![allow(dead_code)]
use assert_cmd::assert::Assert;
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EMBEDDING_DIM: usize = 128;

/// Tiny valid 1x1 PNG, the shape a signature capture produces.
pub const SIG_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

pub fn jornalero() -> Command {
    cargo_bin_cmd!("jornalero")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jornalero.sqlite", name));
    let store = path.to_string_lossy().to_string();
    fs::remove_file(&store).ok();
    store
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a probe frames file: each element is a 128-float array (face) or
/// null (no face detected)
pub fn frames_file(name: &str, fills: &[Option<f32>]) -> String {
    let frames: Vec<Option<Vec<f32>>> = fills
        .iter()
        .map(|f| f.map(|v| vec![v; EMBEDDING_DIM]))
        .collect();
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frames.json", name));
    fs::write(&path, serde_json::to_string(&frames).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

/// Write a signature file holding a PNG data URL
pub fn signature_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sig.txt", name));
    fs::write(&path, format!("data:image/png;base64,{SIG_PNG_B64}")).unwrap();
    path.to_string_lossy().to_string()
}

/// Run one scripted menu session against the given store
pub fn run_session(store: &str, input: String) -> Assert {
    jornalero()
        .args(["--store", store, "--test"])
        .write_stdin(input)
        .assert()
}

/// Scripted enrollment of one worker whose embedding is `fill` repeated
pub fn enroll(store: &str, test: &str, id: &str, name: &str, fill: f32) {
    let frames = frames_file(&format!("{test}_{id}_enroll"), &[Some(fill)]);
    let sig = signature_file(&format!("{test}_{id}"));
    run_session(store, format!("1\n{id}\n{name}\n{frames}\n{sig}\n0\n")).success();
}

/// Scripted check-in: level, 1-based activity number, hours, embedding fill
pub fn checkin(store: &str, test: &str, level: u8, activity_no: usize, hours: &str, fill: f32) -> Assert {
    let frames = frames_file(&format!("{test}_checkin"), &[Some(fill)]);
    run_session(
        store,
        format!("2\nCiclo A\n{level}\n{activity_no}\n{hours}\n{frames}\n0\n"),
    )
}
