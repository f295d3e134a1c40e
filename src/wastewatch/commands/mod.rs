//! # Command Layer
//!
//! One module per user-facing action. Commands sit between a UI and the
//! [`ReportRepository`](crate::repository::ReportRepository): they validate input the
//! way a submission form would, call the repository, and describe the outcome as a
//! [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **User interaction**: confirmations are the UI's job, before calling in
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Messages
//!
//! Normal outcomes that are not data ("No reports yet.", a lookup miss) are `Info`
//! messages, not errors. A write that failed in storage does not fail the command;
//! it adds a `Warning` so the user knows the change may not survive.
//!
//! ## Command Modules
//!
//! - [`submit`]: file a new report
//! - [`status`]: look a report up by id
//! - [`confirm`]: show the report just submitted
//! - [`history`]: list all reports, newest first
//! - [`delete`]: remove one report
//! - [`clear`]: remove every report
//! - [`config`]: show and change settings

use crate::config::WastewatchConfig;
use crate::error::ReportError;
use crate::model::Report;
use serde::Serialize;

pub mod clear;
pub mod config;
pub mod confirm;
pub mod delete;
pub mod history;
pub mod status;
pub mod submit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_reports: Vec<Report>,
    pub listed_reports: Vec<Report>,
    pub config: Option<WastewatchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_reports(mut self, reports: Vec<Report>) -> Self {
        self.listed_reports = reports;
        self
    }

    pub fn with_config(mut self, config: WastewatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Surface a storage write failure as a warning.
    pub(crate) fn note_write_error(&mut self, write_error: Option<ReportError>) {
        if let Some(e) = write_error {
            self.add_message(CmdMessage::warning(format!(
                "Your change may not have been saved: {}",
                e
            )));
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
