use crate::config::CheckinConfig;
use crate::forms::FormVerdict;
use crate::model::Attendee;
use crate::stats::EventStats;

pub mod config;
pub mod export;
pub mod format;
pub mod search;
pub mod stats;
pub mod status;
pub mod validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A generated file, ready for whoever decides where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub attendees: Vec<Attendee>,
    pub stats: Option<EventStats>,
    pub verdict: Option<FormVerdict>,
    pub artifact: Option<ExportArtifact>,
    pub config: Option<CheckinConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_attendees(mut self, attendees: Vec<Attendee>) -> Self {
        self.attendees = attendees;
        self
    }

    pub fn with_stats(mut self, stats: EventStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_verdict(mut self, verdict: FormVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    pub fn with_artifact(mut self, artifact: ExportArtifact) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn with_config(mut self, config: CheckinConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
