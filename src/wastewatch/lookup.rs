//! Status lookup by report id.
//!
//! Matching is case-insensitive and ignores surrounding whitespace, so `rpt1234`,
//! ` RPT1234 ` and `Rpt1234` all find `RPT1234`. Deletion, by contrast, matches ids
//! exactly (see [`ReportRepository::delete_by_id`]).

use crate::model::Report;
use crate::repository::ReportRepository;
use crate::store::backend::StorageBackend;

/// First report whose id equals `query` ignoring ASCII case. A blank query finds nothing.
pub fn find_by_id<'a>(reports: &'a [Report], query: &str) -> Option<&'a Report> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    reports
        .iter()
        .find(|r| r.report_id.eq_ignore_ascii_case(query))
}

impl<B: StorageBackend> ReportRepository<B> {
    pub fn find_by_id(&self, query: &str) -> Option<Report> {
        find_by_id(&self.list(), query).cloned()
    }
}
