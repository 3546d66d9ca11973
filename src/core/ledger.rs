//! Append-only attendance ledger.
//!
//! Exclusively owns the `WorkdayEntry` records. Entries are appended on a
//! successful check-in and never updated; the only removals are bulk
//! deletions keyed by entry id. The same-day dedup rule is enforced by the
//! check-in machine, not here.

use crate::models::WorkdayEntry;
use crate::utils::date::month_key;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Conjunctive entry filter: omitted criteria match everything.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    pub worker_id: Option<String>,
    /// Month key, "YYYY-MM".
    pub year_month: Option<String>,
    pub activity: Option<String>,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.worker_id.is_none() && self.year_month.is_none() && self.activity.is_none()
    }

    fn matches(&self, e: &WorkdayEntry) -> bool {
        if let Some(w) = &self.worker_id
            && &e.employee_id != w
        {
            return false;
        }
        if let Some(m) = &self.year_month
            && &month_key(&e.timestamp) != m
        {
            return false;
        }
        if let Some(a) = &self.activity
            && &e.activity != a
        {
            return false;
        }
        true
    }
}

/// Entries of one worker, grouped for the workdays table.
#[derive(Debug)]
pub struct WorkerGroup<'a> {
    pub worker_id: String,
    pub worker_name: String,
    pub entries: Vec<&'a WorkdayEntry>,
}

#[derive(Debug)]
pub struct Ledger {
    entries: Vec<WorkdayEntry>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl Ledger {
    /// Build from a loaded slot document. Documents written by the original
    /// front-end carry no `id`; those entries (id 0) are re-keyed here.
    pub fn from_entries(mut entries: Vec<WorkdayEntry>) -> Self {
        let mut next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        for e in &mut entries {
            if e.id == 0 {
                e.id = next_id;
                next_id += 1;
            }
        }
        Self { entries, next_id }
    }

    pub fn entries(&self) -> &[WorkdayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry, assigning its ledger id. Returns the id.
    pub fn append(&mut self, mut entry: WorkdayEntry) -> i64 {
        entry.id = self.next_id;
        self.next_id += 1;
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Undo of the last append, used when the persistence write fails.
    pub fn rollback_last(&mut self) {
        self.entries.pop();
    }

    /// Replace the whole collection (rollback of a failed bulk deletion).
    pub fn restore(&mut self, entries: Vec<WorkdayEntry>) {
        self.entries = entries;
    }

    pub fn snapshot(&self) -> Vec<WorkdayEntry> {
        self.entries.clone()
    }

    /// The same-day dedup probe: does the worker already have an entry on
    /// the given local calendar day?
    pub fn has_entry_for_day(&self, worker_id: &str, day: NaiveDate) -> bool {
        self.entries
            .iter()
            .any(|e| e.employee_id == worker_id && e.local_day() == day)
    }

    /// Conjunctive filter; storage order is preserved.
    pub fn filter(&self, f: &EntryFilter) -> Vec<&WorkdayEntry> {
        self.entries.iter().filter(|e| f.matches(e)).collect()
    }

    /// Remove the entries whose id appears in `ids`. Returns the count
    /// actually removed, which can be less than `ids.len()`.
    pub fn delete_by_ids(&mut self, ids: &HashSet<i64>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !ids.contains(&e.id));
        before - self.entries.len()
    }

    /// Remove every entry of the given local calendar day.
    pub fn remove_day(&mut self, day: NaiveDate) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.local_day() != day);
        before - self.entries.len()
    }

    /// Remove every entry; returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Entries of the given day, newest first, for the daily records panel.
    pub fn day_entries(&self, day: NaiveDate) -> Vec<&WorkdayEntry> {
        let mut v: Vec<&WorkdayEntry> = self
            .entries
            .iter()
            .filter(|e| e.local_day() == day)
            .collect();
        v.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        v
    }

    /// Group entries per worker, groups in first-seen ledger order and
    /// entries within a group in ledger order.
    pub fn group_by_worker(&self) -> Vec<WorkerGroup<'_>> {
        let mut groups: Vec<WorkerGroup> = Vec::new();
        for e in &self.entries {
            match groups.iter_mut().find(|g| g.worker_id == e.employee_id) {
                Some(g) => g.entries.push(e),
                None => groups.push(WorkerGroup {
                    worker_id: e.employee_id.clone(),
                    worker_name: e.employee_name.clone(),
                    entries: vec![e],
                }),
            }
        }
        groups
    }

    /// Sorted distinct month keys, for the month filter picker.
    pub fn distinct_months(&self) -> Vec<String> {
        let mut months: Vec<String> = self
            .entries
            .iter()
            .map(|e| month_key(&e.timestamp))
            .collect();
        months.sort();
        months.dedup();
        months
    }

    /// Sorted distinct activity labels, for the activity filter picker.
    pub fn distinct_activities(&self) -> Vec<String> {
        let mut acts: Vec<String> = self.entries.iter().map(|e| e.activity.clone()).collect();
        acts.sort();
        acts.dedup();
        acts
    }
}
