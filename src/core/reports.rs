//! Report reducers over the full ledger.
//!
//! Every metric row carries two money figures on purpose: `nominal_total`
//! (count × flat jornal value, the figure the original reports displayed)
//! and `amount_total` (sum of the entries' stored amounts, which depends on
//! hours). The two can diverge and are shown side by side rather than
//! unified.

use crate::core::ledger::Ledger;
use crate::core::payroll::JORNAL_VALUE;
use crate::models::WorkdayEntry;
use chrono::NaiveDate;

const TOP_N: usize = 10;

/// One bar of a metric panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub count: usize,
    /// Bar width relative to the tallest row, 0..=100.
    pub bar_pct: f64,
    /// count × flat jornal value.
    pub nominal_total: i64,
    /// Sum of the stored per-entry amounts.
    pub amount_total: i64,
}

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total_entries: usize,
    pub nominal_total: i64,
    pub amount_total: i64,
    pub distinct_activities: usize,
}

/// Figures of the header stats bar.
#[derive(Debug, Clone)]
pub struct TodaySummary {
    pub workers_enrolled: usize,
    pub entries_today: usize,
    pub amount_today: i64,
}

struct Bucket {
    label: String,
    count: usize,
    amount: i64,
}

fn reduce<F>(entries: &[WorkdayEntry], key: F) -> Vec<Bucket>
where
    F: Fn(&WorkdayEntry) -> String,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    for e in entries {
        let k = key(e);
        match buckets.iter_mut().find(|b| b.label == k) {
            Some(b) => {
                b.count += 1;
                b.amount += e.valor_jornal;
            }
            None => buckets.push(Bucket {
                label: k,
                count: 1,
                amount: e.valor_jornal,
            }),
        }
    }
    buckets
}

fn to_rows(buckets: Vec<Bucket>) -> Vec<MetricRow> {
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    buckets
        .into_iter()
        .map(|b| MetricRow {
            bar_pct: if max_count == 0 {
                0.0
            } else {
                b.count as f64 / max_count as f64 * 100.0
            },
            nominal_total: b.count as i64 * JORNAL_VALUE,
            amount_total: b.amount,
            label: b.label,
            count: b.count,
        })
        .collect()
}

/// Top activities by occurrence count, descending, at most ten rows.
/// First-seen order breaks count ties (stable sort).
pub fn activity_metrics(ledger: &Ledger) -> Vec<MetricRow> {
    let mut buckets = reduce(ledger.entries(), |e| e.activity.clone());
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(TOP_N);
    to_rows(buckets)
}

/// Top workers by occurrence count, descending, at most ten rows. The label
/// carries the display name with the id.
pub fn worker_metrics(ledger: &Ledger) -> Vec<MetricRow> {
    let mut buckets = reduce(ledger.entries(), |e| {
        format!("{} ({})", e.employee_name, e.employee_id)
    });
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(TOP_N);
    to_rows(buckets)
}

/// Per-level counts, sorted ascending by label rather than by count. At most
/// six labels exist, so this reducer is never truncated.
pub fn level_metrics(ledger: &Ledger) -> Vec<MetricRow> {
    let mut buckets = reduce(ledger.entries(), |e| e.nivel.clone());
    buckets.sort_by(|a, b| a.label.cmp(&b.label));
    to_rows(buckets)
}

pub fn report_summary(ledger: &Ledger) -> ReportSummary {
    ReportSummary {
        total_entries: ledger.len(),
        nominal_total: ledger.len() as i64 * JORNAL_VALUE,
        amount_total: ledger.entries().iter().map(|e| e.valor_jornal).sum(),
        distinct_activities: ledger.distinct_activities().len(),
    }
}

pub fn today_summary(ledger: &Ledger, workers_enrolled: usize, today: NaiveDate) -> TodaySummary {
    let todays = ledger.day_entries(today);
    TodaySummary {
        workers_enrolled,
        entries_today: todays.len(),
        amount_today: todays.iter().map(|e| e.valor_jornal).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use chrono::TimeZone;

    fn entry(worker: &str, nivel: &str, activity: &str, amount: i64) -> WorkdayEntry {
        WorkdayEntry {
            id: 0,
            employee_id: worker.to_string(),
            employee_name: format!("name-{worker}"),
            ciclo: None,
            nivel: nivel.to_string(),
            activity: activity.to_string(),
            hours: 8.0,
            valor_jornal: amount,
            timestamp: Local.with_ymd_and_hms(2001, 1, 1, 8, 0, 0).unwrap(),
            date: String::new(),
            time: String::new(),
        }
    }

    fn ledger(entries: Vec<WorkdayEntry>) -> Ledger {
        let mut l = Ledger::default();
        for e in entries {
            l.append(e);
        }
        l
    }

    #[test]
    fn activity_rows_sort_descending_by_count() {
        let l = ledger(vec![
            entry("W1", "Nivel 3", "Desmalezado", 30_000),
            entry("W2", "Nivel 3", "Desmalezado", 30_000),
            entry("W3", "Nivel 3", "Poda de bajos", 60_000),
        ]);

        let rows = activity_metrics(&l);
        assert_eq!(rows[0].label, "Desmalezado");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].bar_pct, 100.0);
        assert_eq!(rows[1].label, "Poda de bajos");
        assert_eq!(rows[1].bar_pct, 50.0);
    }

    #[test]
    fn level_rows_sort_by_label_not_by_count() {
        let l = ledger(vec![
            entry("W1", "Nivel 3", "Desmalezado", 60_000),
            entry("W2", "Nivel 1", "Siembra inicial", 60_000),
            entry("W3", "Nivel 1", "Siembra inicial", 60_000),
        ]);

        let rows = level_metrics(&l);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Nivel 1", "Nivel 3"]);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn nominal_and_amount_totals_can_diverge() {
        // two half-day entries: stored 30 000 each, nominal 60 000 each
        let l = ledger(vec![
            entry("W1", "Nivel 3", "Desmalezado", 30_000),
            entry("W1", "Nivel 3", "Desmalezado", 30_000),
        ]);

        let rows = activity_metrics(&l);
        assert_eq!(rows[0].nominal_total, 120_000);
        assert_eq!(rows[0].amount_total, 60_000);

        let s = report_summary(&l);
        assert_eq!(s.nominal_total, 120_000);
        assert_eq!(s.amount_total, 60_000);
    }

    #[test]
    fn top_ten_truncation_applies_to_activities() {
        let mut entries = Vec::new();
        for i in 0..12 {
            entries.push(entry("W1", "Nivel 3", &format!("Actividad {i}"), 60_000));
        }
        let l = ledger(entries);
        assert_eq!(activity_metrics(&l).len(), 10);
    }

    #[test]
    fn worker_label_carries_name_and_id() {
        let l = ledger(vec![entry("W1", "Nivel 3", "Desmalezado", 60_000)]);
        let rows = worker_metrics(&l);
        assert_eq!(rows[0].label, "name-W1 (W1)");
    }

    #[test]
    fn empty_ledger_produces_empty_panels() {
        let l = Ledger::default();
        assert!(activity_metrics(&l).is_empty());
        assert!(worker_metrics(&l).is_empty());
        assert!(level_metrics(&l).is_empty());
        assert_eq!(report_summary(&l).total_entries, 0);
    }

    #[test]
    fn today_summary_counts_only_todays_entries() {
        let mut l = Ledger::default();
        let mut today_e = entry("W1", "Nivel 3", "Desmalezado", 30_000);
        today_e.timestamp = Local::now();
        l.append(today_e);
        l.append(entry("W2", "Nivel 3", "Desmalezado", 60_000)); // 2001-01-01

        let s = today_summary(&l, 5, Local::now().date_naive());
        assert_eq!(s.workers_enrolled, 5);
        assert_eq!(s.entries_today, 1);
        assert_eq!(s.amount_today, 30_000);
    }
}
