//! # Domain Model
//!
//! A [`Report`] is a single service request filed by a citizen. Reports are
//! persisted as a flat JSON array under the `reports` key, with these field names:
//!
//! ```text
//! { "reportId": "RPT4821", "name": "...", "address": "...", "issue": "...",
//!   "date": "2025-03-02T09:15:27.341Z", "status": "Pending" }
//! ```
//!
//! ## Identifiers
//!
//! Ids are `RPT` followed by four digits in `1000..=9999`. They are only minted by
//! [`crate::repository::generate_id`], which guarantees uniqueness within a collection.
//!
//! ## Construction
//!
//! User input enters through [`NewReport::new`], which trims every field and rejects
//! blanks. A `Report` is never built from raw input directly; the repository turns a
//! validated `NewReport` into a `Report` with a fresh id, the current time and
//! [`ReportStatus::Pending`].

use crate::error::{ReportError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ID_PREFIX: &str = "RPT";
pub const ID_MIN: u16 = 1000;
pub const ID_MAX: u16 = 9999;

/// Number of distinct ids available.
pub const ID_SPACE: usize = (ID_MAX - ID_MIN) as usize + 1;

pub fn format_id(n: u16) -> String {
    format!("{}{}", ID_PREFIX, n)
}

/// True for `RPT` + exactly four ASCII digits within the id range.
pub fn is_well_formed_id(id: &str) -> bool {
    let Some(digits) = id.strip_prefix(ID_PREFIX) else {
        return false;
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    digits
        .parse::<u16>()
        .map(|n| (ID_MIN..=ID_MAX).contains(&n))
        .unwrap_or(false)
}

/// Every new report starts out `Pending`. Any other status found in storage is kept
/// verbatim so it survives the next save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Pending,
    Other(String),
}

impl From<String> for ReportStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => ReportStatus::Pending,
            _ => ReportStatus::Other(value),
        }
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Pending => "Pending".to_string(),
            ReportStatus::Other(value) => value,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "Pending"),
            ReportStatus::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "reportId")]
    pub report_id: String,
    pub name: String,
    pub address: String,
    pub issue: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl Report {
    pub(crate) fn new(report_id: String, input: NewReport, created_at: DateTime<Utc>) -> Self {
        Self {
            report_id,
            name: input.name,
            address: input.address,
            issue: input.issue,
            created_at,
            status: ReportStatus::Pending,
        }
    }
}

/// Validated submission data: every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    name: String,
    address: String,
    issue: String,
}

impl NewReport {
    pub fn new(
        name: impl AsRef<str>,
        address: impl AsRef<str>,
        issue: impl AsRef<str>,
    ) -> Result<Self> {
        let name = required("name", name.as_ref())?;
        let address = required("address", address.as_ref())?;
        let issue = required("issue", issue.as_ref())?;
        Ok(Self {
            name,
            address,
            issue,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReportError::Validation(format!(
            "Please fill all fields before submitting ({} is empty).",
            field
        )));
    }
    Ok(trimmed.to_string())
}
