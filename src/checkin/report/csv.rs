use chrono::FixedOffset;

use super::format_long;
use crate::model::Attendee;

pub const CSV_MIME: &str = "text/csv; charset=utf-8";
pub const BOM: char = '\u{FEFF}';
pub const DELIMITER: char = ';';
pub const LINE_ENDING: &str = "\r\n";

pub const HEADERS: [&str; 9] = [
    "ID",
    "Nombre",
    "Apellido",
    "Teléfono",
    "Email",
    "Deportes",
    "Estado",
    "Fecha de Registro",
    "Fecha de Check-in",
];

const MISSING_CHECK_IN: &str = "N/A";

/// Quotes `value` (doubling inner quotes) iff it holds a delimiter, a quote or a newline.
pub fn escape_field(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// The whole file, BOM included. An empty collection still gets the header line.
pub fn build_csv(attendees: &[Attendee], offset: &FixedOffset) -> String {
    let mut lines = Vec::with_capacity(attendees.len() + 1);
    lines.push(HEADERS.join(";"));

    for attendee in attendees {
        let check_in = attendee
            .check_in_time
            .map(|t| escape_field(&format_long(t, offset)))
            .unwrap_or_else(|| MISSING_CHECK_IN.to_string());

        let row = [
            escape_field(&attendee.id),
            escape_field(&attendee.first_name),
            escape_field(&attendee.last_name),
            escape_field(&attendee.phone),
            escape_field(&attendee.email),
            escape_field(&attendee.sports.join(", ")),
            escape_field(attendee.status.label()),
            escape_field(&format_long(attendee.registration_date, offset)),
            check_in,
        ];
        lines.push(row.join(";"));
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join(LINE_ENDING));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn quito() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn attendee() -> Attendee {
        Attendee {
            id: "WPF-001".to_string(),
            first_name: "María José".to_string(),
            last_name: "Pérez".to_string(),
            phone: "0991234567".to_string(),
            email: "maria@example.com".to_string(),
            sports: vec!["Yoga".to_string(), "Running".to_string()],
            status: Status::Registered,
            check_in_time: Some(Utc.with_ymd_and_hms(2026, 3, 8, 14, 5, 0).unwrap()),
            registration_date: Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).unwrap(),
            cedula: None,
            age: None,
            sector: None,
            birth_date: None,
            profession: None,
        }
    }

    /// Splits one CSV line back into fields, honouring quotes.
    fn parse_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ';' if !in_quotes => fields.push(std::mem::take(&mut current)),
                other => current.push(other),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a;b"), "\"a;b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field("a, b"), "a, b");
    }

    #[test]
    fn test_empty_collection_is_bom_and_header() {
        let csv = build_csv(&[], &quito());
        assert_eq!(
            csv,
            "\u{FEFF}ID;Nombre;Apellido;Teléfono;Email;Deportes;Estado;Fecha de Registro;Fecha de Check-in"
        );
    }

    #[test]
    fn test_single_registered_row() {
        let csv = build_csv(&[attendee()], &quito());
        let body = csv.strip_prefix(BOM).unwrap();
        let lines: Vec<_> = body.split(LINE_ENDING).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "WPF-001;María José;Pérez;0991234567;maria@example.com;Yoga, Running;Registrado;01/03/2026, 10:00:00;08/03/2026, 09:05:00"
        );
    }

    #[test]
    fn test_pending_row_has_na_check_in() {
        let mut pending = attendee();
        pending.status = Status::Pending;
        pending.check_in_time = None;
        let csv = build_csv(&[pending], &quito());
        assert!(csv.ends_with(";Pendiente;01/03/2026, 10:00:00;N/A"));
    }

    proptest! {
        #[test]
        fn fields_survive_escaping(
            first in "[a-zA-Z;\" ]{0,12}",
            email in "[a-z@.;\"]{0,12}",
        ) {
            let mut a = attendee();
            a.first_name = first.clone();
            a.email = email.clone();
            let csv = build_csv(&[a], &quito());
            let body = csv.strip_prefix(BOM).unwrap();
            let row = body.split(LINE_ENDING).nth(1).unwrap();
            let fields = parse_line(row);
            prop_assert_eq!(fields.len(), HEADERS.len());
            prop_assert_eq!(&fields[1], &first);
            prop_assert_eq!(&fields[4], &email);
        }
    }
}
