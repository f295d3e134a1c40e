use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReportError, Result};
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

/// Delete one report. Unlike a status lookup, the id must match the stored id exactly
/// (surrounding whitespace aside).
pub fn run<B: StorageBackend>(repo: &ReportRepository<B>, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    let report = repo.list().into_iter().find(|r| r.report_id == id);

    let deleted = repo.delete_by_id(id);
    let report = match report {
        Some(report) if deleted.value => report,
        _ => return Err(ReportError::NotFound(id.to_string())),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Report deleted: {}",
        report.report_id
    )));
    result.note_write_error(deleted.write_error);
    result.affected_reports.push(report);
    Ok(result)
}
