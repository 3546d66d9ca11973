//! Application state: config, store, roster, ledger and the recognition
//! driver.
//!
//! Every mutation follows the same discipline: mutate the in-memory
//! collection, write the full slot document, and roll the memory back if the
//! write fails. Success is only reported after the write.

use crate::config::Config;
use crate::core::checkin::{
    CheckinOutcome, CheckinSession, ProbeSource, SelectedActivity, Tick, build_entry,
};
use crate::core::ledger::Ledger;
use crate::core::roster::Roster;
use crate::db::initialize::init_store;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::slots::{load_workdays, load_workers, save_workdays, save_workers};
use crate::errors::AppResult;
use crate::models::{Worker, WorkdayEntry};
use crate::sync::SyncClient;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::money::format_cop;
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

pub struct App {
    pub cfg: Config,
    pub pool: DbPool,
    pub roster: Roster,
    pub ledger: Ledger,
    pub sync: Option<SyncClient>,
    pub test_mode: bool,
}

impl App {
    /// Open the store, load both slot documents and build the sync client.
    pub fn open(cfg: Config, test_mode: bool) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.store)?;
        init_store(&pool.conn)?;

        let roster = Roster::from_workers(load_workers(&pool.conn)?);
        let entries = load_workdays(&pool.conn)?;
        let had_unkeyed = entries.iter().any(|e| e.id == 0);
        let ledger = Ledger::from_entries(entries);

        let sync = SyncClient::from_config(&cfg)?;

        let app = Self {
            cfg,
            pool,
            roster,
            ledger,
            sync,
            test_mode,
        };

        // documents from the original front-end lack entry ids; persist the
        // re-keyed collection once so ids stay stable across sessions
        if had_unkeyed {
            app.persist_workdays()?;
        }

        Ok(app)
    }

    fn persist_workers(&self) -> AppResult<()> {
        save_workers(&self.pool.conn, self.roster.workers())
    }

    /// Append to the operation log. The logged operation is already
    /// committed, so a failed log write is reported as a warning, never as
    /// an error.
    pub(crate) fn log_op(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = oplog(&self.pool.conn, operation, target, message) {
            warning(format!("No se pudo escribir el log de operaciones: {e}"));
        }
    }

    fn persist_workdays(&self) -> AppResult<()> {
        save_workdays(&self.pool.conn, self.ledger.entries())
    }

    /// Enroll a worker and persist the roster. Rolls back on write failure.
    pub fn enroll(&mut self, worker: Worker) -> AppResult<()> {
        let id = worker.id.clone();
        let name = worker.name.clone();
        self.roster.enroll(worker)?;

        if let Err(e) = self.persist_workers() {
            self.roster.rollback_last();
            return Err(e);
        }

        self.log_op("enroll", &id, &format!("empleado {name} registrado"));
        Ok(())
    }

    /// Drive a recognition session over the probe source until it reaches a
    /// terminal state. One frame per tick, paced by the configured cadence
    /// (elided in test mode).
    ///
    /// The session lives inside this call, so a second polling loop cannot
    /// exist while one is running; cancellation via an exhausted source (or
    /// an already-cancelled session) is idempotent.
    pub fn run_recognition(
        &mut self,
        selection: SelectedActivity,
        source: &mut dyn ProbeSource,
    ) -> AppResult<CheckinOutcome> {
        let mut session = CheckinSession::new(selection);

        loop {
            let frame = source.next_frame()?;

            let matched: Option<Worker> = match session.tick(
                frame,
                self.roster.workers(),
                &self.ledger,
                self.cfg.match_threshold,
                today(),
            )? {
                Tick::NoFace | Tick::NoMatch => None,
                Tick::Stopped => {
                    return Ok(CheckinOutcome::Cancelled);
                }
                Tick::Duplicate(w) => {
                    return Ok(CheckinOutcome::Duplicate {
                        worker_name: w.name.clone(),
                    });
                }
                Tick::Matched(w) => Some(w.clone()),
            };

            if let Some(worker) = matched {
                let entry = self.record_matched(&worker, session.selection())?;
                session.complete();
                return Ok(CheckinOutcome::Recorded(entry));
            }

            if !self.test_mode {
                thread::sleep(Duration::from_millis(self.cfg.recognition_cadence_ms));
            }
        }
    }

    /// Append the entry for a matched worker, persist, log, and push it to
    /// the collector best-effort.
    fn record_matched(
        &mut self,
        worker: &Worker,
        selection: &SelectedActivity,
    ) -> AppResult<WorkdayEntry> {
        let entry = build_entry(worker, selection);
        let id = self.ledger.append(entry.clone());

        if let Err(e) = self.persist_workdays() {
            self.ledger.rollback_last();
            return Err(e);
        }

        // the appended copy carries the assigned id
        let mut recorded = entry;
        recorded.id = id;

        self.log_op(
            "checkin",
            &recorded.employee_id,
            &format!(
                "{} - {} - {} ({})",
                recorded.employee_name,
                recorded.activity,
                recorded.nivel,
                format_cop(recorded.valor_jornal)
            ),
        );

        self.push_best_effort(std::slice::from_ref(&recorded));
        Ok(recorded)
    }

    /// Fire-and-forget push. Failures are logged, never propagated.
    pub fn push_best_effort(&self, records: &[WorkdayEntry]) {
        let Some(client) = &self.sync else { return };

        match client.push_records(records) {
            Ok(n) => {
                self.log_op("sync", "", &format!("{n} registros enviados al colector"));
            }
            Err(e) => {
                warning(format!("Sincronización fallida (se continúa): {e}"));
                self.log_op("sync_failed", "", &e.to_string());
            }
        }
    }

    /// Delete the entries whose id is in `ids`. Rolls back on write failure.
    pub fn delete_entries(&mut self, ids: &HashSet<i64>) -> AppResult<usize> {
        let backup = self.ledger.snapshot();
        let removed = self.ledger.delete_by_ids(ids);

        if removed == 0 {
            return Ok(0);
        }

        if let Err(e) = self.persist_workdays() {
            self.ledger.restore(backup);
            return Err(e);
        }

        self.log_op("delete", "", &format!("{removed} jornadas eliminadas por filtro"));
        Ok(removed)
    }

    /// Remove today's entries.
    pub fn purge_today(&mut self) -> AppResult<usize> {
        let backup = self.ledger.snapshot();
        let removed = self.ledger.remove_day(today());

        if removed == 0 {
            return Ok(0);
        }

        if let Err(e) = self.persist_workdays() {
            self.ledger.restore(backup);
            return Err(e);
        }

        self.log_op("purge", "", &format!("{removed} registros de hoy eliminados"));
        Ok(removed)
    }

    /// Remove every enrolled worker.
    pub fn clear_workers(&mut self) -> AppResult<usize> {
        let backup = self.roster.snapshot();
        let removed = self.roster.clear();

        if removed == 0 {
            return Ok(0);
        }

        if let Err(e) = self.persist_workers() {
            self.roster.restore(backup);
            return Err(e);
        }

        self.log_op("purge", "", &format!("{removed} empleados eliminados"));
        Ok(removed)
    }

    /// Full wipe: workers and entries. Both slots are rewritten; a failed
    /// write restores both collections.
    pub fn wipe_all(&mut self) -> AppResult<(usize, usize)> {
        let worker_backup = self.roster.snapshot();
        let entry_backup = self.ledger.snapshot();

        let workers_removed = self.roster.clear();
        let entries_removed = self.ledger.clear();

        let result = self.persist_workers().and_then(|()| self.persist_workdays());
        if let Err(e) = result {
            self.roster.restore(worker_backup);
            self.ledger.restore(entry_backup);
            // memory is consistent again, but the slots may now disagree
            // with each other until the next successful write
            return Err(e);
        }

        self.log_op(
            "wipe",
            "",
            &format!("{workers_removed} empleados y {entries_removed} jornadas eliminados"),
        );
        Ok((workers_removed, entries_removed))
    }
}
