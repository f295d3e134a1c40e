use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewReport;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    repo: &ReportRepository<B>,
    name: &str,
    address: &str,
    issue: &str,
) -> Result<CmdResult> {
    let input = NewReport::new(name, address, issue)?;
    let created = repo.create(input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Report submitted: {}",
        created.value.report_id
    )));
    result.note_write_error(created.write_error);
    result.affected_reports.push(created.value);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ReportError;
    use crate::model::ReportStatus;
    use crate::store::mem_backend::MemBackend;
    use crate::store::ReportStore;

    fn repo() -> ReportRepository<MemBackend> {
        ReportRepository::with_seed(ReportStore::with_backend(MemBackend::new()), 1)
    }

    #[test]
    fn submits_trimmed_report() {
        let repo = repo();
        let result = run(&repo, " Jane Doe ", "12 Elm St", " Overflowing bin").unwrap();

        assert_eq!(result.affected_reports.len(), 1);
        let report = &result.affected_reports[0];
        assert_eq!(report.name, "Jane Doe");
        assert_eq!(report.issue, "Overflowing bin");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains(&report.report_id));
        assert_eq!(repo.last_created().as_ref(), Some(report));
    }

    #[test]
    fn blank_field_is_rejected_without_mutation() {
        let repo = repo();
        let result = run(&repo, "Jane", "12 Elm St", "   ");

        assert!(matches!(result, Err(ReportError::Validation(_))));
        assert!(repo.list().is_empty());
        assert_eq!(repo.last_created(), None);
    }

    #[test]
    fn failed_write_becomes_warning() {
        let repo = repo();
        repo.store().backend().set_simulate_write_error(true);

        let result = run(&repo, "Jane", "12 Elm St", "Overflowing bin").unwrap();
        assert_eq!(result.affected_reports.len(), 1);
        assert!(result.has_warnings());
    }
}
