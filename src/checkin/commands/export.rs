use crate::commands::{CmdMessage, CmdResult, ExportArtifact};
use crate::config::CheckinConfig;
use crate::error::Result;
use crate::model::Attendee;
use crate::report::csv::{build_csv, CSV_MIME};
use crate::report::html::{build_html, HTML_MIME};
use crate::report::ReportOptions;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
}

pub fn run(
    attendees: &[Attendee],
    format: ExportFormat,
    config: &CheckinConfig,
    generated_at: DateTime<Utc>,
) -> Result<CmdResult> {
    let artifact = match format {
        ExportFormat::Csv => ExportArtifact {
            filename: config.csv_filename.clone(),
            mime: CSV_MIME,
            bytes: build_csv(attendees, &config.utc_offset()?).into_bytes(),
        },
        ExportFormat::Html => {
            let options = ReportOptions::from_config(config, generated_at)?;
            ExportArtifact {
                filename: config.html_filename.clone(),
                mime: HTML_MIME,
                bytes: build_html(attendees, &options)?.into_bytes(),
            }
        }
    };
    debug!(
        ?format,
        records = attendees.len(),
        bytes = artifact.bytes.len(),
        "built export"
    );

    let mut result = CmdResult::default();
    if attendees.is_empty() {
        result.add_message(CmdMessage::warning("No records to export."));
    }
    Ok(result.with_artifact(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Status;
    use chrono::TimeZone;

    fn attendee() -> Attendee {
        Attendee {
            id: "WPF-009".to_string(),
            first_name: "Rosa".to_string(),
            last_name: "Quishpe".to_string(),
            phone: "0987654321".to_string(),
            email: "rosa@example.com".to_string(),
            sports: vec!["Ciclismo".to_string()],
            status: Status::Pending,
            check_in_time: None,
            registration_date: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
            cedula: None,
            age: None,
            sector: None,
            birth_date: None,
            profession: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_csv_artifact() {
        let result = run(
            &[attendee()],
            ExportFormat::Csv,
            &CheckinConfig::default(),
            now(),
        )
        .unwrap();
        let artifact = result.artifact.unwrap();
        assert_eq!(artifact.filename, "registros-warmi-powerfest.csv");
        assert_eq!(artifact.mime, "text/csv; charset=utf-8");
        assert_eq!(&artifact.bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_html_artifact_uses_config() {
        let config = CheckinConfig {
            event_name: "CARRERA 5K".to_string(),
            ..Default::default()
        };
        let result = run(&[attendee()], ExportFormat::Html, &config, now()).unwrap();
        let artifact = result.artifact.unwrap();
        assert_eq!(artifact.mime, HTML_MIME);
        let html = String::from_utf8(artifact.bytes).unwrap();
        assert!(html.contains("<h1>CARRERA 5K</h1>"));
    }

    #[test]
    fn test_empty_export_still_produces_artifact() {
        let result = run(&[], ExportFormat::Csv, &CheckinConfig::default(), now()).unwrap();
        assert!(result.artifact.is_some());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
