//! jornalero library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod sync;
pub mod ui;
pub mod utils;

use app::App;
use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply the command-line store override; the
    // override lives in memory only and is never written back
    let mut cfg = Config::load();
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    cfg.ensure_files(cli.test)?;

    let mut app = App::open(cfg, cli.test)?;
    ui::menu::run(&mut app)
}
