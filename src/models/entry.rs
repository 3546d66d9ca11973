use crate::utils::date::{display_date, display_time};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recorded workday.
///
/// On-disk names ("employeeId", "valorJornal", …) match the record documents
/// the capture front-end wrote. `id` is assigned by the ledger; documents
/// from older stores lack it and are re-keyed at load.
///
/// `valor_jornal` is computed from `hours` when the activity is selected and
/// never edited afterwards. Entries are immutable except for bulk deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdayEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    #[serde(default)]
    pub ciclo: Option<String>,
    /// Level label, e.g. "Nivel 3".
    pub nivel: String,
    pub activity: String,
    pub hours: f64,
    #[serde(rename = "valorJornal")]
    pub valor_jornal: i64,
    pub timestamp: DateTime<Local>,
    /// Display strings derived from `timestamp` at creation.
    pub date: String,
    pub time: String,
}

impl WorkdayEntry {
    /// Cycle for display and export ("N/A" when the entry has none).
    pub fn ciclo_label(&self) -> &str {
        self.ciclo.as_deref().unwrap_or("N/A")
    }

    /// Local calendar date of the entry, the unit of the same-day rule.
    pub fn local_day(&self) -> chrono::NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Builds the derived display fields from the timestamp.
pub(crate) fn derived_strings(ts: &DateTime<Local>) -> (String, String) {
    (display_date(ts), display_time(ts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_front_end_record_without_id() {
        let doc = serde_json::json!({
            "employeeId": "W1",
            "employeeName": "Ana",
            "ciclo": "Ciclo 2026-A",
            "nivel": "Nivel 3",
            "activity": "Desmalezado",
            "hours": 4.0,
            "valorJornal": 30000,
            "timestamp": "2026-08-01T07:12:00.000Z",
            "date": "1/8/2026",
            "time": "7:12:00",
        });

        let e: WorkdayEntry = serde_json::from_value(doc).unwrap();
        assert_eq!(e.id, 0);
        assert_eq!(e.valor_jornal, 30_000);
        assert_eq!(e.ciclo_label(), "Ciclo 2026-A");
    }

    #[test]
    fn missing_cycle_displays_na() {
        let e = WorkdayEntry {
            id: 1,
            employee_id: "W1".into(),
            employee_name: "Ana".into(),
            ciclo: None,
            nivel: "Nivel 1".into(),
            activity: "Siembra inicial".into(),
            hours: 8.0,
            valor_jornal: 60_000,
            timestamp: Local::now(),
            date: String::new(),
            time: String::new(),
        };
        assert_eq!(e.ciclo_label(), "N/A");
    }
}
