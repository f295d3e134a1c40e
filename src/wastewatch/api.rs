//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every UI.
//! It dispatches to `commands/*.rs` and hands back structured [`CmdResult`]s; it does
//! no printing and holds no business logic.
//!
//! ## Generic Over StorageBackend
//!
//! `ReportApi<B: StorageBackend>` works with any backend:
//! - Production: `ReportApi<FsBackend>`
//! - Testing: `ReportApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;
use crate::store::ReportStore;
use std::path::PathBuf;

pub struct ReportApi<B: StorageBackend> {
    repo: ReportRepository<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> ReportApi<B> {
    pub fn new(backend: B, data_dir: PathBuf) -> Self {
        Self {
            repo: ReportRepository::new(ReportStore::with_backend(backend)),
            data_dir,
        }
    }

    pub fn with_repository(repo: ReportRepository<B>, data_dir: PathBuf) -> Self {
        Self { repo, data_dir }
    }

    pub fn submit_report(&self, name: &str, address: &str, issue: &str) -> Result<CmdResult> {
        commands::submit::run(&self.repo, name, address, issue)
    }

    pub fn report_status(&self, query: &str) -> Result<CmdResult> {
        commands::status::run(&self.repo, query)
    }

    pub fn last_submitted(&self) -> Result<CmdResult> {
        commands::confirm::run(&self.repo)
    }

    pub fn history(&self) -> Result<CmdResult> {
        commands::history::run(&self.repo)
    }

    pub fn delete_report(&self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&self.repo, id)
    }

    pub fn clear_reports(&self) -> Result<CmdResult> {
        commands::clear::run(&self.repo)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> ReportApi<MemBackend> {
        let repo = ReportRepository::with_seed(ReportStore::with_backend(MemBackend::new()), 9);
        ReportApi::with_repository(repo, dir.path().to_path_buf())
    }

    #[test]
    fn submit_then_lookup_and_confirm() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);

        let submitted = api
            .submit_report("Jane Doe", "12 Elm St", "Overflowing bin")
            .unwrap();
        let report = submitted.affected_reports[0].clone();

        let status = api.report_status(&report.report_id).unwrap();
        assert_eq!(status.listed_reports, vec![report.clone()]);

        let last = api.last_submitted().unwrap();
        assert_eq!(last.listed_reports, vec![report]);
    }

    #[test]
    fn delete_and_clear_dispatch() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);
        let first = api.submit_report("A", "Elm St", "Bin").unwrap();
        api.submit_report("B", "Oak Ave", "Bin").unwrap();

        api.delete_report(&first.affected_reports[0].report_id)
            .unwrap();
        assert_eq!(api.history().unwrap().listed_reports.len(), 1);

        api.clear_reports().unwrap();
        assert!(api.history().unwrap().listed_reports.is_empty());
    }

    #[test]
    fn config_uses_data_dir() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);

        api.config(ConfigAction::Set("track-interval-ms".into(), "5".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
