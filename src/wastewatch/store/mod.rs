//! # Storage Layer
//!
//! Reports live in a plain key/value namespace with two keys:
//!
//! ```text
//! reports        # JSON array of Report objects, oldest first
//! lastReportId   # raw id of the most recently created report (or absent)
//! ```
//!
//! The [`StorageBackend`](backend::StorageBackend) trait covers raw I/O for a key, and
//! [`ReportStore`] layers serialization and failure tolerance on top of it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per key under a data directory,
//!   written atomically (temp file + rename).
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O. Can
//!   simulate write failures and hold deliberately corrupt data.
//!
//! ## Tolerance Rules
//!
//! Storage is treated as untrusted and possibly unavailable:
//!
//! - **Reads never fail.** A missing key, an unreadable file or a value that is not a
//!   JSON array all load as an empty collection (logged at `warn`).
//! - **Records are read one by one.** An array element that is not a valid report is
//!   skipped (logged at `warn`); the readable ones still load.
//! - **Duplicates are dropped on load.** If the persisted array holds the same
//!   `reportId` twice, the first occurrence wins.
//! - **Writes report failure.** `save` and the pointer setters log at `error` and hand
//!   the error back, so callers can tell the user their change may not be durable.
//!   Nothing is retried.
//! - **Writes are whole-collection.** `save` replaces the entire array, so callers
//!   must always pass the complete intended collection.

use crate::error::{ReportError, Result};
use crate::model::Report;
use backend::{StorageBackend, LAST_REPORT_KEY, REPORTS_KEY};
use log::{error, warn};
use serde_json::Value;
use std::collections::HashSet;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub struct ReportStore<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> ReportStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the full collection, oldest first. Never fails: bad or missing data
    /// reads as an empty collection.
    pub fn load(&self) -> Vec<Report> {
        let raw = match self.backend.read(REPORTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read reports from storage: {}", e);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to parse reports from storage: {}", e);
                return Vec::new();
            }
        };

        let reports: Vec<Report> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("Skipping unreadable report at index {}: {}", index, e);
                    None
                }
            })
            .collect();
        drop_duplicate_ids(reports)
    }

    /// Replace the persisted collection with `reports`.
    pub fn save(&self, reports: &[Report]) -> Result<()> {
        let result = serde_json::to_string(reports)
            .map_err(ReportError::from)
            .and_then(|content| self.backend.write(REPORTS_KEY, &content));
        if let Err(e) = &result {
            error!("Failed to save {} reports: {}", reports.len(), e);
        }
        result
    }

    /// The id of the most recently created report, if one is recorded.
    pub fn pointer(&self) -> Option<String> {
        match self.backend.read(LAST_REPORT_KEY) {
            Ok(Some(raw)) => {
                let id = raw.trim();
                (!id.is_empty()).then(|| id.to_string())
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read last report id from storage: {}", e);
                None
            }
        }
    }

    pub fn set_pointer(&self, id: &str) -> Result<()> {
        let result = self.backend.write(LAST_REPORT_KEY, id);
        if let Err(e) = &result {
            error!("Failed to record last report id {}: {}", id, e);
        }
        result
    }

    pub fn clear_pointer(&self) -> Result<()> {
        let result = self.backend.remove(LAST_REPORT_KEY);
        if let Err(e) = &result {
            error!("Failed to clear last report id: {}", e);
        }
        result
    }
}

fn drop_duplicate_ids(reports: Vec<Report>) -> Vec<Report> {
    let mut seen = HashSet::new();
    let total = reports.len();
    let unique: Vec<Report> = reports
        .into_iter()
        .filter(|r| seen.insert(r.report_id.clone()))
        .collect();
    if unique.len() != total {
        warn!(
            "Dropped {} reports with duplicate ids while loading",
            total - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::{NewReport, Report};
    use chrono::{TimeZone, Utc};

    fn report(id: &str, name: &str) -> Report {
        let input = NewReport::new(name, "12 Elm St", "Overflowing bin").unwrap();
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();
        Report::new(id.to_string(), input, created)
    }

    fn store() -> ReportStore<MemBackend> {
        ReportStore::with_backend(MemBackend::new())
    }

    #[test]
    fn missing_key_loads_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let store = store();
        let reports = vec![
            report("RPT5000", "Third"),
            report("RPT1000", "First"),
            report("RPT9999", "Second"),
        ];
        store.save(&reports).unwrap();
        assert_eq!(store.load(), reports);
    }

    #[test]
    fn corrupt_data_loads_empty() {
        let store = store();
        store.backend.insert_raw(REPORTS_KEY, "{not json at all");
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_array_loads_empty() {
        let store = store();
        store
            .backend
            .insert_raw(REPORTS_KEY, r#"{"reportId":"RPT1234"}"#);
        assert!(store.load().is_empty());
    }

    #[test]
    fn unreadable_records_are_skipped() {
        let store = store();
        let valid = serde_json::to_value(report("RPT1111", "Valid")).unwrap();
        let mut resolved = serde_json::to_value(report("RPT2222", "Resolved")).unwrap();
        resolved["status"] = "Resolved".into();
        let raw = serde_json::json!([
            valid,
            resolved,
            {"reportId": "RPT3333", "name": "No address"},
            {"reportId": 1},
            42
        ]);
        store.backend.insert_raw(REPORTS_KEY, &raw.to_string());

        let loaded = store.load();
        let ids: Vec<&str> = loaded.iter().map(|r| r.report_id.as_str()).collect();
        assert_eq!(ids, vec!["RPT1111", "RPT2222"]);
        assert_eq!(loaded[1].status.to_string(), "Resolved");
    }

    #[test]
    fn blank_value_loads_empty() {
        let store = store();
        store.backend.insert_raw(REPORTS_KEY, "  ");
        assert!(store.load().is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let store = store();
        let reports = vec![
            report("RPT1111", "Original"),
            report("RPT2222", "Other"),
            report("RPT1111", "Copy"),
        ];
        let raw = serde_json::to_string(&reports).unwrap();
        store.backend.insert_raw(REPORTS_KEY, &raw);

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Original");
        assert_eq!(loaded[1].report_id, "RPT2222");
    }

    #[test]
    fn failed_save_keeps_previous_collection() {
        let store = store();
        let before = vec![report("RPT1234", "Kept")];
        store.save(&before).unwrap();

        store.backend.set_simulate_write_error(true);
        let result = store.save(&[report("RPT1234", "Kept"), report("RPT4321", "Lost")]);

        assert!(result.is_err());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn pointer_roundtrip() {
        let store = store();
        assert_eq!(store.pointer(), None);

        store.set_pointer("RPT4242").unwrap();
        assert_eq!(store.pointer(), Some("RPT4242".to_string()));

        store.clear_pointer().unwrap();
        assert_eq!(store.pointer(), None);
    }

    #[test]
    fn blank_pointer_reads_as_absent() {
        let store = store();
        store.backend.insert_raw(LAST_REPORT_KEY, "");
        assert_eq!(store.pointer(), None);
    }
}
