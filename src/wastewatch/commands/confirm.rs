use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(repo: &ReportRepository<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match repo.last_created() {
        Some(report) => result.listed_reports.push(report),
        None => result.add_message(CmdMessage::info("No recent report found.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, submit};
    use crate::store::mem_backend::MemBackend;
    use crate::store::ReportStore;

    fn repo() -> ReportRepository<MemBackend> {
        ReportRepository::with_seed(ReportStore::with_backend(MemBackend::new()), 3)
    }

    #[test]
    fn shows_report_just_submitted() {
        let repo = repo();
        submit::run(&repo, "First", "Elm St", "Bin").unwrap();
        let latest = submit::run(&repo, "Second", "Oak Ave", "Missed pickup").unwrap();

        let result = run(&repo).unwrap();
        assert_eq!(result.listed_reports, latest.affected_reports);
    }

    #[test]
    fn nothing_after_deleting_it() {
        let repo = repo();
        let latest = submit::run(&repo, "Jane", "Elm St", "Bin").unwrap();
        delete::run(&repo, &latest.affected_reports[0].report_id).unwrap();

        let result = run(&repo).unwrap();
        assert!(result.listed_reports.is_empty());
        assert_eq!(result.messages[0].content, "No recent report found.");
    }
}
