//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Layout (width, truncation, padding) is
//! computed here with Unicode-aware widths so accented names line up. Functions return
//! `String`s; `commands.rs` decides where they are printed.

use checkin::api::{CmdMessage, MessageLevel};
use checkin::config::CheckinConfig;
use checkin::forms::FormVerdict;
use checkin::model::{Attendee, Status};
use checkin::stats::EventStats;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 12;
const PHONE_WIDTH: usize = 11;
const STATUS_WIDTH: usize = 11;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn status_colored(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Registered => text.green(),
        Status::Pending => text.yellow(),
        Status::NoShow => text.red(),
    }
}

/// One line per attendee: id, name, phone, status, and how long ago they checked in.
pub fn render_attendee_list(attendees: &[Attendee], now: DateTime<Utc>) -> String {
    if attendees.is_empty() {
        return "No attendees found.\n".to_string();
    }

    let fixed = ID_WIDTH + 1 + PHONE_WIDTH + 1 + STATUS_WIDTH + 1 + TIME_WIDTH;
    let name_width = LINE_WIDTH.saturating_sub(fixed + 1);

    let mut out = String::new();
    for attendee in attendees {
        let id = pad_to_width(&truncate_to_width(&attendee.id, ID_WIDTH), ID_WIDTH);
        let name = pad_to_width(
            &truncate_to_width(&attendee.full_name(), name_width),
            name_width,
        );
        let phone = pad_to_width(&attendee.phone, PHONE_WIDTH);
        let status = pad_to_width(attendee.status.label(), STATUS_WIDTH);
        let when = match attendee.check_in_time {
            Some(at) => format_time_ago(at, now),
            None => format!("{:>width$}", "-", width = TIME_WIDTH),
        };

        out.push_str(&format!(
            "{} {} {} {} {}\n",
            id.dimmed(),
            name,
            phone,
            status_colored(attendee.status, &status),
            when.dimmed()
        ));
    }
    out
}

pub fn render_stats(stats: &EventStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<14}{}\n", "Total", stats.total.to_string().bold()));
    out.push_str(&format!(
        "{:<14}{} ({}%)\n",
        Status::Registered.label(),
        stats.checked_in.to_string().green(),
        stats.check_in_rate()
    ));
    out.push_str(&format!(
        "{:<14}{}\n",
        Status::Pending.label(),
        stats.pending.to_string().yellow()
    ));
    out.push_str(&format!(
        "{:<14}{}\n",
        Status::NoShow.label(),
        stats.no_show.to_string().red()
    ));
    out.push_str(&format!("{:<14}{}\n", "Deportes", stats.sports_count));

    if !stats.sport_breakdown.is_empty() {
        out.push('\n');
        let widest = stats
            .sport_breakdown
            .keys()
            .map(|k| k.width())
            .max()
            .unwrap_or(0);
        for (sport, count) in &stats.sport_breakdown {
            out.push_str(&format!("  {} {}\n", pad_to_width(sport, widest), count));
        }
    }
    out
}

pub fn render_verdict(verdict: &FormVerdict) -> String {
    let mut out = String::new();
    for field in &verdict.fields {
        let name = format!("{:?}", field.field);
        let line = match field.message() {
            None => format!("  {} {}", "✓".green(), name),
            Some(message) => format!("  {} {}: {}", "✗".red(), name, message.red()),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_config(config: &CheckinConfig) -> String {
    let mut out = String::new();
    for key in CheckinConfig::KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
