//! Operation log and store information panels.

use crate::app::App;
use crate::db::log::print_oplog;
use crate::db::stats::print_store_info;
use crate::errors::AppResult;

pub fn show_oplog(app: &mut App) -> AppResult<()> {
    print_oplog(&mut app.pool)
}

pub fn show_store_info(app: &mut App) -> AppResult<()> {
    let store = app.cfg.store.clone();
    print_store_info(&mut app.pool, &store)
}
