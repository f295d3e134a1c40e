//! Last-created pointer resolution.
//!
//! The pointer is only an id. It is resolved against the collection on every read,
//! and a pointer that names a report which no longer exists reads as absent.

use crate::model::Report;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

pub fn resolve_last_created<'a>(reports: &'a [Report], pointer: Option<&str>) -> Option<&'a Report> {
    let id = pointer?;
    reports.iter().find(|r| r.report_id == id)
}

impl<B: StorageBackend> ReportRepository<B> {
    /// The most recently created report, if it still exists.
    pub fn last_created(&self) -> Option<Report> {
        let pointer = self.store().pointer();
        resolve_last_created(&self.list(), pointer.as_deref()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewReport;
    use crate::store::backend::LAST_REPORT_KEY;
    use crate::store::mem_backend::MemBackend;
    use crate::store::ReportStore;

    fn repo() -> ReportRepository<MemBackend> {
        ReportRepository::with_seed(ReportStore::with_backend(MemBackend::new()), 5)
    }

    fn submit(repo: &ReportRepository<MemBackend>, name: &str) -> Report {
        repo.create(NewReport::new(name, "12 Elm St", "Overflowing bin").unwrap())
            .unwrap()
            .into_value()
    }

    #[test]
    fn submit_then_confirm() {
        let repo = repo();
        let report = submit(&repo, "Jane Doe");
        assert_eq!(repo.last_created(), Some(report));
    }

    #[test]
    fn absent_without_pointer() {
        let repo = repo();
        assert_eq!(repo.last_created(), None);
    }

    #[test]
    fn absent_after_deleting_last_created() {
        let repo = repo();
        submit(&repo, "Older");
        let latest = submit(&repo, "Latest");

        assert!(repo.delete_by_id(&latest.report_id).value);
        assert_eq!(repo.last_created(), None);
    }

    #[test]
    fn dangling_pointer_reads_as_absent() {
        let repo = repo();
        submit(&repo, "Someone");
        repo.store().backend().insert_raw(LAST_REPORT_KEY, "RPT0001");

        assert_eq!(repo.last_created(), None);
    }

    #[test]
    fn pointer_match_is_exact() {
        let repo = repo();
        let report = submit(&repo, "Jane");
        repo.store()
            .backend()
            .insert_raw(LAST_REPORT_KEY, &report.report_id.to_lowercase());

        assert_eq!(repo.last_created(), None);
    }

    #[test]
    fn absent_after_clear_all() {
        let repo = repo();
        for name in ["A", "B", "C"] {
            submit(&repo, name);
        }
        assert!(repo.clear_all().is_durable());
        assert!(repo.list().is_empty());
        assert_eq!(repo.last_created(), None);
    }
}
