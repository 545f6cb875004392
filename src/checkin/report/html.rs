use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::{format_long, format_short_time, ReportOptions};
use crate::error::Result;
use crate::model::Attendee;
use crate::stats::EventStats;

pub const HTML_MIME: &str = "text/html; charset=utf-8";

const REPORT_TEMPLATE: &str = "report.html";
const NO_CHECK_IN: &str = "-";

// The `.html` suffix turns on minijinja's HTML auto-escaping for every value.
static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(REPORT_TEMPLATE, include_str!("templates/report.html"))
        .expect("bundled report template must parse");
    env
});

#[derive(Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    name: String,
    phone: &'a str,
    email: &'a str,
    sports: String,
    status_label: &'static str,
    status_class: &'static str,
    check_in: String,
}

impl<'a> ReportRow<'a> {
    fn new(attendee: &'a Attendee, options: &ReportOptions) -> Self {
        Self {
            id: &attendee.id,
            name: attendee.full_name(),
            phone: &attendee.phone,
            email: &attendee.email,
            sports: attendee.sports.join(", "),
            status_label: attendee.status.label(),
            status_class: attendee.status.css_key(),
            check_in: attendee
                .check_in_time
                .map(|t| format_short_time(t, &options.offset))
                .unwrap_or_else(|| NO_CHECK_IN.to_string()),
        }
    }
}

/// Printable report page. Tile counts come from `attendees`, not from any cached stats.
pub fn build_html(attendees: &[Attendee], options: &ReportOptions) -> Result<String> {
    let stats = EventStats::from_attendees(attendees);
    let rows: Vec<ReportRow> = attendees
        .iter()
        .map(|a| ReportRow::new(a, options))
        .collect();

    let template = ENV.get_template(REPORT_TEMPLATE)?;
    let html = template.render(context! {
        event_name => options.event_name,
        subtitle => options.subtitle,
        footer => options.footer,
        // digits and punctuation only; the template prints it unescaped
        generated_at => format_long(options.generated_at, &options.offset),
        stats => stats,
        rows => rows,
        record_count => attendees.len(),
    })?;
    Ok(html)
}
