//! Check-in flow: activity selection, recognition loop, same-day dedup.
//!
//! The machine is explicit: `SelectingActivity → AwaitingRecognition →
//! (DuplicateRejected | EntryRecorded) | Cancelled`. Probe acquisition sits
//! behind the `ProbeSource` trait so the recognition loop never touches a
//! camera directly.

use crate::core::ledger::Ledger;
use crate::core::matcher::best_match;
use crate::core::payroll::payroll;
use crate::errors::{AppError, AppResult};
use crate::models::catalog::{level_label, validate_activity};
use crate::models::entry::derived_strings;
use crate::models::{Embedding, Worker, WorkdayEntry};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;

/// The in-flight selection, validated at construction. Ephemeral: it lives
/// only between activity selection and the end of the recognition attempt.
#[derive(Debug, Clone)]
pub struct SelectedActivity {
    pub ciclo: String,
    pub level: u8,
    /// Display label, "Nivel {level}".
    pub nivel: String,
    pub activity: String,
    pub hours: f64,
    pub valor_jornal: i64,
}

impl SelectedActivity {
    pub fn new(ciclo: String, level: u8, activity: String, hours: f64) -> AppResult<Self> {
        validate_activity(level, &activity)?;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidHours(hours.to_string()));
        }
        Ok(Self {
            ciclo,
            level,
            nivel: level_label(level),
            activity,
            hours,
            valor_jornal: payroll(hours),
        })
    }
}

/// One sampled camera frame.
pub enum Frame {
    Face(Embedding),
    NoFace,
}

/// External face-embedding capability: one frame per call, `None` when the
/// source is exhausted (the operator-stop signal).
pub trait ProbeSource {
    fn next_frame(&mut self) -> AppResult<Option<Frame>>;
}

/// Frame list loaded from a JSON file: an array whose elements are either a
/// 128-float array (a detected face) or `null` (no face).
pub struct FileProbeSource {
    frames: std::vec::IntoIter<Option<Vec<f32>>>,
}

impl FileProbeSource {
    pub fn open(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let frames: Vec<Option<Vec<f32>>> = serde_json::from_str(&raw)?;
        Ok(Self {
            frames: frames.into_iter(),
        })
    }
}

impl ProbeSource for FileProbeSource {
    fn next_frame(&mut self) -> AppResult<Option<Frame>> {
        match self.frames.next() {
            None => Ok(None),
            Some(None) => Ok(Some(Frame::NoFace)),
            Some(Some(values)) => Ok(Some(Frame::Face(Embedding::new(values)?))),
        }
    }
}

/// Capture the single enrollment frame. Enrollment requires exactly one
/// detected face; anything else aborts with `NoFaceDetected`.
pub fn capture_enrollment(source: &mut dyn ProbeSource) -> AppResult<Embedding> {
    match source.next_frame()? {
        Some(Frame::Face(e)) => Ok(e),
        Some(Frame::NoFace) | None => Err(AppError::NoFaceDetected),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinState {
    SelectingActivity,
    AwaitingRecognition,
    DuplicateRejected,
    EntryRecorded,
    Cancelled,
}

impl CheckinState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CheckinState::DuplicateRejected | CheckinState::EntryRecorded | CheckinState::Cancelled
        )
    }
}

/// Result of feeding one frame to the session.
pub enum Tick<'a> {
    /// No face in the frame; keep polling.
    NoFace,
    /// A face, but nobody under the threshold; keep polling.
    NoMatch,
    /// Matched a worker who already checked in today. Terminal.
    Duplicate(&'a Worker),
    /// Matched a worker with no entry today. The caller records the entry
    /// and then closes the session with [`CheckinSession::complete`].
    Matched(&'a Worker),
    /// Source exhausted or session already stopped. Terminal (cancelled).
    Stopped,
}

/// One recognition session. At most one exists at a time; the application
/// stops any prior session before starting a new one.
pub struct CheckinSession {
    selection: SelectedActivity,
    state: CheckinState,
}

impl CheckinSession {
    pub fn new(selection: SelectedActivity) -> Self {
        Self {
            selection,
            state: CheckinState::AwaitingRecognition,
        }
    }

    pub fn state(&self) -> CheckinState {
        self.state
    }

    pub fn selection(&self) -> &SelectedActivity {
        &self.selection
    }

    /// Abort the session. Idempotent; a no-op on terminal states. Discards
    /// nothing but the ephemeral selection — never committed entries.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = CheckinState::Cancelled;
        }
    }

    /// Close the session after the matched entry has been recorded.
    pub fn complete(&mut self) {
        self.state = CheckinState::EntryRecorded;
    }

    /// Feed one frame. Pure with respect to roster and ledger; recording the
    /// matched entry is the caller's step.
    pub fn tick<'a>(
        &mut self,
        frame: Option<Frame>,
        roster: &'a [Worker],
        ledger: &Ledger,
        max_distance: f32,
        today: NaiveDate,
    ) -> AppResult<Tick<'a>> {
        if self.state.is_terminal() {
            return Ok(Tick::Stopped);
        }

        let Some(frame) = frame else {
            self.state = CheckinState::Cancelled;
            return Ok(Tick::Stopped);
        };

        let probe = match frame {
            Frame::NoFace => return Ok(Tick::NoFace),
            Frame::Face(e) => e,
        };

        match best_match(&probe, roster, max_distance)? {
            None => Ok(Tick::NoMatch),
            Some(worker) => {
                if ledger.has_entry_for_day(&worker.id, today) {
                    self.state = CheckinState::DuplicateRejected;
                    Ok(Tick::Duplicate(worker))
                } else {
                    Ok(Tick::Matched(worker))
                }
            }
        }
    }
}

/// Final result of a recognition session.
pub enum CheckinOutcome {
    Recorded(WorkdayEntry),
    Duplicate { worker_name: String },
    Cancelled,
}

/// Build the entry for a match. The amount comes from the selection, which
/// computed it with `payroll` at construction.
pub fn build_entry(worker: &Worker, selection: &SelectedActivity) -> WorkdayEntry {
    let now = Local::now();
    let (date, time) = derived_strings(&now);
    WorkdayEntry {
        id: 0,
        employee_id: worker.id.clone(),
        employee_name: worker.name.clone(),
        ciclo: Some(selection.ciclo.clone()),
        nivel: selection.nivel.clone(),
        activity: selection.activity.clone(),
        hours: selection.hours,
        valor_jornal: selection.valor_jornal,
        timestamp: now,
        date,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::DEFAULT_MAX_DISTANCE;
    use crate::models::EMBEDDING_DIM;

    fn embedding(fill: f32) -> Embedding {
        Embedding::new(vec![fill; EMBEDDING_DIM]).unwrap()
    }

    fn worker(id: &str, fill: f32) -> Worker {
        Worker::new(id.to_string(), format!("name-{id}"), embedding(fill), None)
    }

    fn selection() -> SelectedActivity {
        SelectedActivity::new("Ciclo A".into(), 3, "Desmalezado".into(), 4.0).unwrap()
    }

    #[test]
    fn selection_validates_catalog_and_hours() {
        assert!(SelectedActivity::new("C".into(), 3, "Desmalezado".into(), 4.0).is_ok());
        assert!(SelectedActivity::new("C".into(), 1, "Desmalezado".into(), 4.0).is_err());
        assert!(SelectedActivity::new("C".into(), 3, "Desmalezado".into(), 0.0).is_err());
        assert!(SelectedActivity::new("C".into(), 3, "Desmalezado".into(), -1.0).is_err());
    }

    #[test]
    fn selection_computes_the_amount() {
        let s = selection();
        assert_eq!(s.valor_jornal, 30_000);
        assert_eq!(s.nivel, "Nivel 3");
    }

    #[test]
    fn match_then_complete_records() {
        let roster = vec![worker("W1", 0.0)];
        let ledger = Ledger::default();
        let mut session = CheckinSession::new(selection());
        let today = Local::now().date_naive();

        let tick = session
            .tick(
                Some(Frame::Face(embedding(0.01))),
                &roster,
                &ledger,
                DEFAULT_MAX_DISTANCE,
                today,
            )
            .unwrap();
        let matched = match tick {
            Tick::Matched(w) => w,
            _ => panic!("expected a match"),
        };
        assert_eq!(matched.id, "W1");

        session.complete();
        assert_eq!(session.state(), CheckinState::EntryRecorded);
    }

    #[test]
    fn duplicate_today_is_rejected_without_mutation() {
        let roster = vec![worker("W1", 0.0)];
        let mut ledger = Ledger::default();
        ledger.append(build_entry(&roster[0], &selection()));
        let before = ledger.len();

        let mut session = CheckinSession::new(selection());
        let tick = session
            .tick(
                Some(Frame::Face(embedding(0.01))),
                &roster,
                &ledger,
                DEFAULT_MAX_DISTANCE,
                Local::now().date_naive(),
            )
            .unwrap();

        assert!(matches!(tick, Tick::Duplicate(w) if w.id == "W1"));
        assert_eq!(session.state(), CheckinState::DuplicateRejected);
        assert_eq!(ledger.len(), before);
    }

    #[test]
    fn no_face_and_no_match_keep_polling() {
        let roster = vec![worker("W1", 0.5)]; // far from any probe
        let ledger = Ledger::default();
        let mut session = CheckinSession::new(selection());
        let today = Local::now().date_naive();

        let t1 = session
            .tick(Some(Frame::NoFace), &roster, &ledger, 0.6, today)
            .unwrap();
        assert!(matches!(t1, Tick::NoFace));

        let t2 = session
            .tick(Some(Frame::Face(embedding(0.0))), &roster, &ledger, 0.6, today)
            .unwrap();
        assert!(matches!(t2, Tick::NoMatch));
        assert_eq!(session.state(), CheckinState::AwaitingRecognition);
    }

    #[test]
    fn exhausted_source_cancels_the_session() {
        let roster = vec![worker("W1", 0.0)];
        let ledger = Ledger::default();
        let mut session = CheckinSession::new(selection());

        let tick = session
            .tick(None, &roster, &ledger, 0.6, Local::now().date_naive())
            .unwrap();
        assert!(matches!(tick, Tick::Stopped));
        assert_eq!(session.state(), CheckinState::Cancelled);
    }

    #[test]
    fn cancel_is_idempotent_and_final() {
        let mut session = CheckinSession::new(selection());
        session.cancel();
        session.cancel();
        assert_eq!(session.state(), CheckinState::Cancelled);

        // ticking a cancelled session is a no-op stop
        let roster = vec![worker("W1", 0.0)];
        let ledger = Ledger::default();
        let tick = session
            .tick(
                Some(Frame::Face(embedding(0.0))),
                &roster,
                &ledger,
                0.6,
                Local::now().date_naive(),
            )
            .unwrap();
        assert!(matches!(tick, Tick::Stopped));
    }

    #[test]
    fn cancel_does_not_override_a_recorded_session() {
        let mut session = CheckinSession::new(selection());
        session.complete();
        session.cancel();
        assert_eq!(session.state(), CheckinState::EntryRecorded);
    }

    #[test]
    fn file_probe_source_reads_faces_nulls_and_end() {
        let dir = std::env::temp_dir().join("jornalero_probe_source_test.json");
        let face: Vec<f32> = vec![0.25; EMBEDDING_DIM];
        let doc = serde_json::json!([null, face]);
        fs::write(&dir, doc.to_string()).unwrap();

        let mut src = FileProbeSource::open(&dir).unwrap();
        assert!(matches!(src.next_frame().unwrap(), Some(Frame::NoFace)));
        assert!(matches!(src.next_frame().unwrap(), Some(Frame::Face(_))));
        assert!(src.next_frame().unwrap().is_none());

        fs::remove_file(&dir).ok();
    }
}
