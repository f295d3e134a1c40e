use super::backend::StorageBackend;
use crate::error::{ReportError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since wastewatch is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without paying for a lock.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    failing_keys: RefCell<HashSet<String>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write and remove fail, as a full or disabled store would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make writes and removes of `key` fail while other keys keep working.
    pub fn simulate_write_error_for(&self, key: &str) {
        self.failing_keys.borrow_mut().insert(key.to_string());
    }

    /// Plant a raw value, bypassing serialization (e.g. corrupt data).
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() || self.failing_keys.borrow().contains(key) {
            return Err(ReportError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("reports").unwrap(), None);

        backend.write("reports", "[]").unwrap();
        assert_eq!(backend.read("reports").unwrap(), Some("[]".to_string()));

        backend.remove("reports").unwrap();
        assert_eq!(backend.read("reports").unwrap(), None);
    }

    #[test]
    fn simulated_failure_keeps_previous_value() {
        let backend = MemBackend::new();
        backend.write("lastReportId", "RPT1234").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.write("lastReportId", "RPT5678").is_err());
        assert!(backend.remove("lastReportId").is_err());
        assert_eq!(backend.raw("lastReportId"), Some("RPT1234".to_string()));
    }

    #[test]
    fn failure_can_target_one_key() {
        let backend = MemBackend::new();
        backend.simulate_write_error_for("reports");

        assert!(backend.write("reports", "[]").is_err());
        assert!(backend.remove("reports").is_err());
        backend.write("lastReportId", "RPT1234").unwrap();
        assert_eq!(backend.raw("reports"), None);
        assert_eq!(backend.raw("lastReportId"), Some("RPT1234".to_string()));
    }
}
