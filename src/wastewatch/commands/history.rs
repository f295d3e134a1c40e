use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

/// All reports, newest first.
pub fn run<B: StorageBackend>(repo: &ReportRepository<B>) -> Result<CmdResult> {
    let mut reports = repo.list();
    reports.reverse();

    let mut result = CmdResult::default();
    if reports.is_empty() {
        result.add_message(CmdMessage::info("No reports yet."));
    }
    Ok(result.with_listed_reports(reports))
}
