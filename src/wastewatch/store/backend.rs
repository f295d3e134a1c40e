use crate::error::Result;

/// Key holding the serialized report collection.
pub const REPORTS_KEY: &str = "reports";

/// Key holding the id of the most recently created report.
pub const LAST_REPORT_KEY: &str = "lastReportId";

/// Abstract interface for raw key/value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ReportStore handles the "what" (serialization, tolerance of bad data).
pub trait StorageBackend {
    /// Read the raw value for a key.
    /// Returns Ok(None) if the key was never written or has been removed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for a key.
    /// MUST leave the previous value intact if the write fails.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
