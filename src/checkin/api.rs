//! # API Facade
//!
//! The single entry point for every checkin operation, whatever the client. It loads
//! records through a [`RecordSource`], maps them with the configured [`StatusPolicy`],
//! and dispatches to `commands/*.rs`.
//!
//! The facade does no formatting and no terminal I/O; it returns `Result<CmdResult>`.
//! Exports come back as an [`ExportArtifact`](crate::commands::ExportArtifact) and the
//! caller decides where the bytes go.
//!
//! `CheckinApi<S: RecordSource>` is generic so tests can run against
//! [`InMemorySource`](crate::source::memory::InMemorySource) without touching disk.

use crate::commands;
use crate::config::CheckinConfig;
use crate::error::Result;
use crate::forms::{FormRules, RegistrationForm};
use crate::model::Attendee;
use crate::source::RecordSource;
use crate::transform::{attendees_from_records, StatusPolicy};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CheckinApi<S: RecordSource> {
    source: S,
    config: CheckinConfig,
    config_dir: PathBuf,
}

impl<S: RecordSource> CheckinApi<S> {
    pub fn new(source: S, config: CheckinConfig, config_dir: PathBuf) -> Self {
        Self {
            source,
            config,
            config_dir,
        }
    }

    pub fn config(&self) -> &CheckinConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn status_policy(&self) -> StatusPolicy {
        StatusPolicy::from_strict_flag(self.config.strict_status)
    }

    /// Every record from the source, mapped to attendees.
    pub fn attendees(&self) -> Result<Vec<Attendee>> {
        let records = self.source.load_records()?;
        debug!(
            source = %self.source.describe(),
            count = records.len(),
            "mapping records"
        );
        attendees_from_records(records, self.status_policy())
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        Ok(commands::CmdResult::default().with_attendees(self.attendees()?))
    }

    pub fn export(
        &self,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        let attendees = self.attendees()?;
        commands::export::run(&attendees, format, &self.config, generated_at)
    }

    pub fn stats(&self, recent_limit: usize) -> Result<commands::CmdResult> {
        let attendees = self.attendees()?;
        Ok(commands::stats::run(&attendees, recent_limit))
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        let attendees = self.attendees()?;
        Ok(commands::search::run(&attendees, term))
    }

    pub fn validate_form(
        &self,
        form: &RegistrationForm,
        rules: &FormRules,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        Ok(commands::validate::run(form, rules, today))
    }

    pub fn format_value(&self, field: FormatField, value: &str) -> Result<commands::CmdResult> {
        Ok(commands::format::run(field, value))
    }

    pub fn convert_status(
        &self,
        direction: StatusDirection,
        value: &str,
    ) -> Result<commands::CmdResult> {
        Ok(commands::status::run(direction, value))
    }

    pub fn manage_config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::format::FormatField;
pub use crate::commands::status::StatusDirection;
pub use crate::commands::{CmdMessage, CmdResult, ExportArtifact, MessageLevel};
