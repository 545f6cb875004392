use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CheckinError;

/// Status as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireStatus {
    Pending,
    CheckedIn,
    NoShow,
}

impl WireStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WireStatus::Pending => "PENDING",
            WireStatus::CheckedIn => "CHECKED_IN",
            WireStatus::NoShow => "NO_SHOW",
        }
    }
}

impl fmt::Display for WireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireStatus {
    type Err = CheckinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(WireStatus::Pending),
            "CHECKED_IN" => Ok(WireStatus::CheckedIn),
            "NO_SHOW" => Ok(WireStatus::NoShow),
            other => Err(CheckinError::UnknownStatus(other.to_string())),
        }
    }
}

/// Status as shown to people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Registrado")]
    Registered,
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "No llegó")]
    NoShow,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Registered => "Registrado",
            Status::Pending => "Pendiente",
            Status::NoShow => "No llegó",
        }
    }

    /// Suffix of the `status-*` CSS class in the printable report.
    pub fn css_key(self) -> &'static str {
        match self {
            Status::Registered => "registrado",
            Status::Pending => "pendiente",
            Status::NoShow => "no-llego",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Registrado" => Some(Status::Registered),
            "Pendiente" => Some(Status::Pending),
            "No llegó" => Some(Status::NoShow),
            _ => None,
        }
    }

    pub fn from_wire(wire: WireStatus) -> Self {
        match wire {
            WireStatus::CheckedIn => Status::Registered,
            WireStatus::Pending => Status::Pending,
            WireStatus::NoShow => Status::NoShow,
        }
    }

    pub fn to_wire(self) -> WireStatus {
        match self {
            Status::Registered => WireStatus::CheckedIn,
            Status::Pending => WireStatus::Pending,
            Status::NoShow => WireStatus::NoShow,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An attendee as the front end sees it.
///
/// `check_in_time` is `Some` exactly when `status` is [`Status::Registered`];
/// [`Attendee::from_record`] repairs records that break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub sports: Vec<String>,
    pub status: Status,
    pub check_in_time: Option<DateTime<Utc>>,
    pub registration_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cedula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

impl Attendee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_checked_in(&self) -> bool {
        self.status == Status::Registered
    }
}
