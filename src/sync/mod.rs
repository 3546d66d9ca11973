//! Best-effort record sync to an external collector.
//!
//! Fire-and-forget: a failed push is logged and never blocks or rolls back
//! the local write. The collector's response body is not trusted or parsed;
//! a completed request counts as success.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::WorkdayEntry;
use serde_json::json;
use std::time::Duration;

pub struct SyncClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl SyncClient {
    /// Build the client from the configuration. `None` when sync is disabled
    /// or no collector URL is configured.
    pub fn from_config(cfg: &Config) -> AppResult<Option<Self>> {
        if !cfg.sync_enabled || cfg.sync_url.trim().is_empty() {
            return Ok(None);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.sync_timeout_secs))
            .build()
            .map_err(|e| AppError::Sync(e.to_string()))?;
        Ok(Some(Self {
            client,
            url: cfg.sync_url.trim().to_string(),
        }))
    }

    /// POST the records to the collector with the original wire field names.
    /// Returns how many records were sent.
    pub fn push_records(&self, records: &[WorkdayEntry]) -> AppResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let payload = json!({
            "action": "addRecords",
            "records": records
                .iter()
                .map(|r| {
                    json!({
                        "timestamp": r.timestamp.to_rfc3339(),
                        "date": r.date,
                        "time": r.time,
                        "employeeId": r.employee_id,
                        "employeeName": r.employee_name,
                        "ciclo": r.ciclo_label(),
                        "nivel": r.nivel,
                        "activity": r.activity,
                        "hours": r.hours,
                        "valorJornal": r.valor_jornal,
                    })
                })
                .collect::<Vec<_>>(),
        });

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|e| AppError::Sync(e.to_string()))?;

        // Response body ignored.
        Ok(records.len())
    }
}
