//! # Attendee Record Transform
//!
//! Maps what the backend sends ([`RegistrationRecord`] and friends) into the
//! [`Attendee`] view model, and builds the request bodies that go back out.
//!
//! ## Status mapping
//!
//! | backend      | shown as     |
//! |--------------|--------------|
//! | `PENDING`    | `Pendiente`  |
//! | `CHECKED_IN` | `Registrado` |
//! | `NO_SHOW`    | `No llegó`   |
//!
//! The string-level helpers ([`to_presentation`], [`to_backend`]) are total: anything
//! unrecognised becomes `Pendiente` / `PENDING`. Record mapping goes through a
//! [`StatusPolicy`]: `Lenient` keeps that fallback (and logs it), `Strict` refuses the
//! record with [`CheckinError::UnknownStatus`] so enum drift between backend and front
//! end surfaces instead of hiding.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::{CheckinError, Result};
use crate::model::{Attendee, Status, WireStatus};

/// Backend literal to presentation label. Unknown input maps to `Pendiente`.
pub fn to_presentation(wire: &str) -> &'static str {
    match wire.parse::<WireStatus>() {
        Ok(status) => Status::from_wire(status).label(),
        Err(_) => Status::Pending.label(),
    }
}

/// Presentation label to backend literal. Unknown input maps to `PENDING`.
pub fn to_backend(label: &str) -> &'static str {
    Status::from_label(label)
        .unwrap_or(Status::Pending)
        .to_wire()
        .as_str()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    #[default]
    Lenient,
    Strict,
}

impl StatusPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Lenient
        }
    }

    pub fn resolve(self, raw: &str) -> Result<Status> {
        match raw.parse::<WireStatus>() {
            Ok(wire) => Ok(Status::from_wire(wire)),
            Err(err) => match self {
                StatusPolicy::Strict => Err(err),
                StatusPolicy::Lenient => {
                    warn!(status = raw, "unknown backend status, treating as pending");
                    Ok(Status::Pending)
                }
            },
        }
    }

    /// [`resolve`](Self::resolve) over the raw JSON field. Absent, `null` and non-string
    /// values are unknown statuses like any other.
    pub fn resolve_value(self, raw: Option<&Value>) -> Result<Status> {
        match raw {
            Some(Value::String(s)) => self.resolve(s),
            Some(other) => self.resolve(&other.to_string()),
            None => self.resolve("null"),
        }
    }
}

/// A registration as returned by `GET /registrations` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
    pub registration_date: DateTime<Utc>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub edad: Option<u32>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn from_record(record: RegistrationRecord, policy: StatusPolicy) -> Result<Self> {
        let status = policy.resolve_value(record.status.as_ref())?;

        let check_in_time = match (status, record.check_in_time) {
            (Status::Registered, None) => {
                warn!(id = %record.id, "checked-in record has no check-in time");
                None
            }
            (Status::Registered, Some(at)) => Some(at),
            (_, Some(_)) => {
                warn!(id = %record.id, status = %status, "dropping check-in time on record that is not checked in");
                None
            }
            (_, None) => None,
        };

        let birth_date = record.birth_date.as_deref().and_then(parse_wire_date);

        Ok(Attendee {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            email: record.email,
            sports: record.sports,
            status,
            check_in_time,
            registration_date: record.registration_date,
            cedula: non_empty(record.cedula),
            age: record.edad,
            sector: non_empty(record.sector),
            birth_date,
            profession: non_empty(record.profession),
        })
    }
}

pub fn attendees_from_records(
    records: Vec<RegistrationRecord>,
    policy: StatusPolicy,
) -> Result<Vec<Attendee>> {
    records
        .into_iter()
        .map(|record| Attendee::from_record(record, policy))
        .collect()
}

/// Accepts a bare `YYYY-MM-DD` or a full ISO timestamp and keeps the date part.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Backend response envelope: `{ success, data?, error?, total? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(CheckinError::Api(
                self.error
                    .unwrap_or_else(|| "Error desconocido".to_string()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Body of `POST /registrations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub sports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cedula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

/// Body of `PATCH /registrations/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: WireStatus,
}

impl StatusUpdateRequest {
    pub fn new(status: Status) -> Self {
        Self {
            status: status.to_wire(),
        }
    }

    /// From a presentation label; unknown labels request `PENDING`.
    pub fn from_label(label: &str) -> Self {
        Self::new(Status::from_label(label).unwrap_or(Status::Pending))
    }
}

/// Body of `PATCH /registrations/{id}` (contact data edit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Success,
    AlreadyUsed,
    NotFound,
}

/// Response of `POST /verify` and `POST /registrations/{id}/check-in`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyTicketResponse {
    pub status: VerificationOutcome,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<RegistrationRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub outcome: VerificationOutcome,
    pub message: String,
    pub attendee: Option<Attendee>,
}

impl VerifyTicketResponse {
    pub fn into_result(self, policy: StatusPolicy) -> Result<VerificationResult> {
        let attendee = self
            .data
            .map(|record| Attendee::from_record(record, policy))
            .transpose()?;
        Ok(VerificationResult {
            outcome: self.status,
            message: self.message,
            attendee,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentScan {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in_time: DateTime<Utc>,
    #[serde(default)]
    pub sports: Vec<String>,
}

/// Response of `GET /stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub checked_in: usize,
    pub pending: usize,
    #[serde(default)]
    pub no_show: usize,
    pub sports_count: usize,
    #[serde(default)]
    pub sport_breakdown: BTreeMap<String, usize>,
    #[serde(default)]
    pub recent_scans: Vec<RecentScan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(status: &str, check_in: Option<&str>) -> RegistrationRecord {
        let check_in = check_in
            .map(|c| format!("\"{}\"", c))
            .unwrap_or_else(|| "null".to_string());
        let json = format!(
            r#"{{
                "id": "WPF-001",
                "firstName": "María",
                "lastName": "Pérez",
                "phone": "0991234567",
                "email": "maria@example.com",
                "sports": ["Yoga", "Fútbol"],
                "birthDate": "1990-05-01T00:00:00.000Z",
                "gender": "FEMALE",
                "profession": "",
                "status": "{}",
                "checkInTime": {},
                "registrationDate": "2026-10-01T15:00:00.000Z",
                "createdAt": "2026-10-01T15:00:00.000Z",
                "updatedAt": "2026-10-01T15:00:00.000Z"
            }}"#,
            status, check_in
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_to_presentation() {
        assert_eq!(to_presentation("CHECKED_IN"), "Registrado");
        assert_eq!(to_presentation("PENDING"), "Pendiente");
        assert_eq!(to_presentation("NO_SHOW"), "No llegó");
        assert_eq!(to_presentation("UNKNOWN"), "Pendiente");
        assert_eq!(to_presentation(""), "Pendiente");
    }

    #[test]
    fn test_to_backend() {
        assert_eq!(to_backend("Registrado"), "CHECKED_IN");
        assert_eq!(to_backend("Pendiente"), "PENDING");
        assert_eq!(to_backend("No llegó"), "NO_SHOW");
        assert_eq!(to_backend("registrado"), "PENDING");
    }

    #[test]
    fn test_mapping_is_a_bijection_on_known_values() {
        for wire in ["PENDING", "CHECKED_IN", "NO_SHOW"] {
            assert_eq!(to_backend(to_presentation(wire)), wire);
        }
        for label in ["Pendiente", "Registrado", "No llegó"] {
            assert_eq!(to_presentation(to_backend(label)), label);
        }
    }

    #[test]
    fn test_from_record_checked_in() {
        let attendee = Attendee::from_record(
            record("CHECKED_IN", Some("2026-10-18T14:30:00Z")),
            StatusPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(attendee.status, Status::Registered);
        assert_eq!(
            attendee.check_in_time,
            Some(Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 0).unwrap())
        );
        assert_eq!(attendee.birth_date, NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(attendee.profession, None);
        assert_eq!(attendee.sports, vec!["Yoga", "Fútbol"]);
    }

    #[test]
    fn test_from_record_drops_stray_check_in() {
        let attendee = Attendee::from_record(
            record("PENDING", Some("2026-10-18T14:30:00Z")),
            StatusPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(attendee.status, Status::Pending);
        assert_eq!(attendee.check_in_time, None);
    }

    #[test]
    fn test_lenient_policy_defaults_unknown_to_pending() {
        let attendee =
            Attendee::from_record(record("CANCELLED", None), StatusPolicy::Lenient).unwrap();
        assert_eq!(attendee.status, Status::Pending);
    }

    #[test]
    fn test_strict_policy_rejects_unknown() {
        let err = Attendee::from_record(record("CANCELLED", None), StatusPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, CheckinError::UnknownStatus(s) if s == "CANCELLED"));
    }

    fn record_with_status_field(status_field: &str) -> RegistrationRecord {
        let json = format!(
            r#"{{
                "id": "WPF-010",
                "firstName": "Ana",
                "lastName": "Vera",
                "phone": "0991234567",
                "email": "ana@example.com",
                {}
                "registrationDate": "2026-10-01T15:00:00Z"
            }}"#,
            status_field
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_null_missing_and_non_string_status_load() {
        for field in [r#""status": null,"#, "", r#""status": 7,"#, r#""status": ["X"],"#] {
            let record = record_with_status_field(field);
            let attendee = Attendee::from_record(record, StatusPolicy::Lenient).unwrap();
            assert_eq!(attendee.status, Status::Pending, "status field {:?}", field);
            assert_eq!(attendee.check_in_time, None);
        }
    }

    #[test]
    fn test_strict_policy_rejects_null_missing_and_non_string_status() {
        let cases = [
            (r#""status": null,"#, "null"),
            ("", "null"),
            (r#""status": 7,"#, "7"),
        ];
        for (field, shown) in cases {
            let err = Attendee::from_record(record_with_status_field(field), StatusPolicy::Strict)
                .unwrap_err();
            assert!(
                matches!(&err, CheckinError::UnknownStatus(s) if s == shown),
                "status field {:?} gave {:?}",
                field,
                err
            );
        }
    }

    #[test]
    fn test_status_update_only_emits_known_literals() {
        let json = serde_json::to_string(&StatusUpdateRequest::from_label("Registrado")).unwrap();
        assert_eq!(json, r#"{"status":"CHECKED_IN"}"#);
        let json = serde_json::to_string(&StatusUpdateRequest::from_label("???")).unwrap();
        assert_eq!(json, r#"{"status":"PENDING"}"#);
    }

    #[test]
    fn test_contact_update_skips_missing_fields() {
        let req = ContactUpdateRequest {
            email: None,
            phone: Some("0991234567".into()),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"phone":"0991234567"}"#
        );
    }

    #[test]
    fn test_envelope_into_data() {
        let ok: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2],"total":2}"#).unwrap();
        assert_eq!(ok.into_data().unwrap(), vec![1, 2]);

        let failed: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"error":"Error: 500"}"#).unwrap();
        assert!(matches!(failed.into_data(), Err(CheckinError::Api(m)) if m == "Error: 500"));
    }

    #[test]
    fn test_verify_response() {
        let json = r#"{
            "status": "already_used",
            "message": "Ticket ya utilizado",
            "data": {
                "id": "WPF-002",
                "firstName": "Ana",
                "lastName": "Ruiz",
                "phone": "0987654321",
                "email": "ana@example.com",
                "sports": ["Running"],
                "status": "CHECKED_IN",
                "checkInTime": "2026-10-18T10:00:00Z",
                "registrationDate": "2026-10-02T10:00:00Z"
            }
        }"#;
        let response: VerifyTicketResponse = serde_json::from_str(json).unwrap();
        let result = response.into_result(StatusPolicy::Lenient).unwrap();
        assert_eq!(result.outcome, VerificationOutcome::AlreadyUsed);
        let attendee = result.attendee.unwrap();
        assert!(attendee.is_checked_in());
        assert_eq!(attendee.full_name(), "Ana Ruiz");
    }

    #[test]
    fn test_verify_not_found_has_no_attendee() {
        let response: VerifyTicketResponse =
            serde_json::from_str(r#"{"status":"not_found","message":"No existe"}"#).unwrap();
        let result = response.into_result(StatusPolicy::Strict).unwrap();
        assert_eq!(result.outcome, VerificationOutcome::NotFound);
        assert!(result.attendee.is_none());
    }
}
