use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(repo: &ReportRepository<B>, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    let mut result = CmdResult::default();

    if query.is_empty() {
        result.add_message(CmdMessage::info("Please enter a Report ID."));
        return Ok(result);
    }

    match repo.find_by_id(query) {
        Some(report) => Ok(result.with_listed_reports(vec![report])),
        None => {
            result.add_message(CmdMessage::info(format!(
                "No report found for {}.",
                query
            )));
            Ok(result)
        }
    }
}
