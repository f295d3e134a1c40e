use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(repo: &ReportRepository<B>) -> Result<CmdResult> {
    let cleared = repo.clear_all();

    let mut result = CmdResult::default();
    let message = match cleared.value {
        0 => "No reports to delete.".to_string(),
        1 => "Deleted 1 report.".to_string(),
        n => format!("Deleted {} reports.", n),
    };
    result.add_message(CmdMessage::success(message));
    result.note_write_error(cleared.write_error);
    Ok(result)
}
