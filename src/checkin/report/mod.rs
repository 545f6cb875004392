//! # Report Generator
//!
//! Turns a collection of [`Attendee`](crate::model::Attendee)s into export artifacts:
//!
//! - [`csv`]: semicolon separated, CRLF, UTF-8 with BOM, so spreadsheet software in
//!   Spanish locales opens it without an import dialog.
//! - [`html`]: a self-contained printable page (inline styles, no external resources).
//!
//! Both builders are stateless. They never read the clock: timestamps are shown at the
//! offset in [`ReportOptions`], and the "generated at" stamp is passed in.

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::CheckinConfig;
use crate::error::Result;

pub mod csv;
pub mod html;

/// Everything the builders need besides the attendees themselves.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub event_name: String,
    pub subtitle: String,
    pub footer: String,
    pub offset: FixedOffset,
    pub generated_at: DateTime<Utc>,
}

impl ReportOptions {
    pub fn from_config(config: &CheckinConfig, generated_at: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            event_name: config.event_name.clone(),
            subtitle: config.report_subtitle.clone(),
            footer: config.footer_text.clone(),
            offset: config.utc_offset()?,
            generated_at,
        })
    }
}

/// `dd/mm/yyyy, HH:MM:SS` at `offset`.
pub fn format_long(timestamp: DateTime<Utc>, offset: &FixedOffset) -> String {
    timestamp
        .with_timezone(offset)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}

/// `HH:MM` at `offset`.
pub fn format_short_time(timestamp: DateTime<Utc>, offset: &FixedOffset) -> String {
    timestamp.with_timezone(offset).format("%H:%M").to_string()
}
