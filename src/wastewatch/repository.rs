//! # Report Repository
//!
//! CRUD over the persisted report collection. Every operation is a full
//! read-modify-write: the collection is loaded from the [`ReportStore`], changed in
//! memory and written back whole. Nothing is cached between calls, so two
//! repositories over the same backend always see each other's writes.
//!
//! ## Id Generation
//!
//! Ids are drawn uniformly from `RPT1000..=RPT9999` and redrawn on collision with an
//! existing id. The loop is capped at [`MAX_ID_ATTEMPTS`] draws; a full id space
//! fails immediately. Both cases return [`ReportError::GenerationExhausted`].
//!
//! ## Durability
//!
//! Mutations never fail because of storage. They return [`Persisted`], which carries
//! the in-memory result together with the first write error, if any. Callers decide
//! whether to surface it.

use crate::error::{ReportError, Result};
use crate::model::{format_id, is_well_formed_id, NewReport, Report, ID_MAX, ID_MIN, ID_SPACE};
use crate::store::backend::StorageBackend;
use crate::store::ReportStore;
use chrono::Utc;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::HashSet;

pub const MAX_ID_ATTEMPTS: usize = 100_000;

/// Draw a fresh id that does not collide with any id in `existing`.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, existing: &[Report]) -> Result<String> {
    let taken: HashSet<&str> = existing.iter().map(|r| r.report_id.as_str()).collect();

    if taken.iter().filter(|id| is_well_formed_id(id)).count() >= ID_SPACE {
        return Err(ReportError::GenerationExhausted { attempts: 0 });
    }

    for attempt in 1..=MAX_ID_ATTEMPTS {
        let candidate = format_id(rng.gen_range(ID_MIN..=ID_MAX));
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
        debug!("Report id {} already taken (attempt {})", candidate, attempt);
    }

    Err(ReportError::GenerationExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}

/// Result of a mutation whose persistence may have failed.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub write_error: Option<ReportError>,
}

impl<T> Persisted<T> {
    fn from_writes(value: T, writes: impl IntoIterator<Item = Result<()>>) -> Self {
        Self {
            value,
            write_error: writes.into_iter().find_map(|w| w.err()),
        }
    }

    pub fn is_durable(&self) -> bool {
        self.write_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

pub struct ReportRepository<B: StorageBackend> {
    store: ReportStore<B>,
    rng: RefCell<StdRng>,
}

impl<B: StorageBackend> ReportRepository<B> {
    pub fn new(store: ReportStore<B>) -> Self {
        Self {
            store,
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Repository with a deterministic id sequence.
    pub fn with_seed(store: ReportStore<B>, seed: u64) -> Self {
        Self {
            store,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn store(&self) -> &ReportStore<B> {
        &self.store
    }

    /// Append a new pending report and mark it as the last created one. The pointer
    /// only moves once the collection holding the report has been saved.
    pub fn create(&self, input: NewReport) -> Result<Persisted<Report>> {
        let mut reports = self.store.load();
        let id = generate_id(&mut *self.rng.borrow_mut(), &reports)?;
        let report = Report::new(id, input, Utc::now());

        reports.push(report.clone());
        let written = self
            .store
            .save(&reports)
            .and_then(|()| self.store.set_pointer(&report.report_id));
        debug!("Created report {}", report.report_id);

        Ok(Persisted::from_writes(report, [written]))
    }

    /// Remove the report whose id is exactly `id`. Returns whether one was removed.
    pub fn delete_by_id(&self, id: &str) -> Persisted<bool> {
        let mut reports = self.store.load();
        let before = reports.len();
        reports.retain(|r| r.report_id != id);
        let removed = reports.len() != before;

        let mut writes = Vec::new();
        if removed {
            writes.push(self.store.save(&reports));
            debug!("Deleted report {}", id);
        }
        if self.store.pointer().as_deref() == Some(id) {
            writes.push(self.store.clear_pointer());
        }

        Persisted::from_writes(removed, writes)
    }

    /// Drop every report and the last-created pointer. Returns how many were removed.
    pub fn clear_all(&self) -> Persisted<usize> {
        let count = self.store.load().len();
        let saved = self.store.save(&[]);
        let cleared = self.store.clear_pointer();
        debug!("Cleared {} reports", count);

        Persisted::from_writes(count, [saved, cleared])
    }

    /// All reports, oldest first.
    pub fn list(&self) -> Vec<Report> {
        self.store.load()
    }
}
