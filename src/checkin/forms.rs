//! # Forms and Verdicts
//!
//! The validators in [`crate::validation`] answer "is this value well formed?". This
//! module answers "is this form submittable, and if not, what do we tell the user?".
//!
//! Each field is a variant of [`FieldInput`], a closed sum type carrying that field's
//! own value type, so checking a field is an exhaustive `match` rather than a runtime
//! shape test. Whether a field is required is decided here (by [`FormRules`]), never
//! by the validator: a blank required field yields its `*Required` kind, a blank
//! optional field is valid, anything else goes to the validator.
//!
//! Form values are immutable: [`RegistrationForm::apply`] takes the previous form and a
//! [`FormChange`] and returns the next form, running the keystroke formatters on the way.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CheckinError, Result};
use crate::format::{format_cedula, format_phone};
use crate::messages::ErrorKind;
use crate::transform::{ContactUpdateRequest, CreateRegistrationRequest, Gender};
use crate::validation::{
    validate_age_input, validate_birth_date, validate_cedula, validate_email, validate_free_text,
    validate_name, validate_phone, validate_sports,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Phone,
    Email,
    Sports,
    Cedula,
    Age,
    Sector,
    Profession,
    BirthDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    Required,
    Optional,
}

/// One field's raw value, tagged with what kind of field it is.
#[derive(Debug, Clone, Copy)]
pub enum FieldInput<'a> {
    FirstName(&'a str),
    LastName(&'a str),
    Phone(&'a str),
    Email(&'a str),
    Sports(&'a [String]),
    Cedula(&'a str),
    Age(&'a str),
    Sector(&'a str),
    Profession(&'a str),
    BirthDate { value: &'a str, today: NaiveDate },
}

impl FieldInput<'_> {
    pub fn name(&self) -> FieldName {
        match self {
            FieldInput::FirstName(_) => FieldName::FirstName,
            FieldInput::LastName(_) => FieldName::LastName,
            FieldInput::Phone(_) => FieldName::Phone,
            FieldInput::Email(_) => FieldName::Email,
            FieldInput::Sports(_) => FieldName::Sports,
            FieldInput::Cedula(_) => FieldName::Cedula,
            FieldInput::Age(_) => FieldName::Age,
            FieldInput::Sector(_) => FieldName::Sector,
            FieldInput::Profession(_) => FieldName::Profession,
            FieldInput::BirthDate { .. } => FieldName::BirthDate,
        }
    }

    pub fn check(&self, requirement: Requirement) -> FieldVerdict {
        let error = match *self {
            FieldInput::FirstName(v) | FieldInput::LastName(v) => check_text(
                v,
                requirement,
                ErrorKind::NameRequired,
                ErrorKind::NameInvalid,
                validate_name,
            ),
            FieldInput::Phone(v) => check_text(
                v,
                requirement,
                ErrorKind::PhoneRequired,
                ErrorKind::PhoneInvalid,
                validate_phone,
            ),
            FieldInput::Email(v) => check_text(
                v,
                requirement,
                ErrorKind::EmailRequired,
                ErrorKind::EmailInvalid,
                validate_email,
            ),
            FieldInput::Sports(sports) => {
                if validate_sports(sports) || requirement == Requirement::Optional {
                    None
                } else {
                    Some(ErrorKind::SportsRequired)
                }
            }
            FieldInput::Cedula(v) => check_text(
                v,
                requirement,
                ErrorKind::CedulaRequired,
                ErrorKind::CedulaInvalid,
                validate_cedula,
            ),
            FieldInput::Age(v) => check_text(
                v,
                requirement,
                ErrorKind::AgeRequired,
                ErrorKind::AgeOutOfRange,
                validate_age_input,
            ),
            FieldInput::Sector(v) => check_text(
                v,
                requirement,
                ErrorKind::SectorRequired,
                ErrorKind::SectorTooLong,
                validate_free_text,
            ),
            FieldInput::Profession(v) => check_text(
                v,
                requirement,
                ErrorKind::ProfessionRequired,
                ErrorKind::ProfessionTooLong,
                validate_free_text,
            ),
            FieldInput::BirthDate { value, today } => check_text(
                value,
                requirement,
                ErrorKind::BirthDateRequired,
                ErrorKind::BirthDateInvalid,
                |v| validate_birth_date(v, today),
            ),
        };

        FieldVerdict {
            field: self.name(),
            error,
        }
    }
}

fn check_text(
    value: &str,
    requirement: Requirement,
    required: ErrorKind,
    invalid: ErrorKind,
    validator: impl Fn(&str) -> bool,
) -> Option<ErrorKind> {
    if value.trim().is_empty() {
        return match requirement {
            Requirement::Required => Some(required),
            Requirement::Optional => None,
        };
    }
    if validator(value) {
        None
    } else {
        Some(invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub field: FieldName,
    pub error: Option<ErrorKind>,
}

impl FieldVerdict {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.error.map(ErrorKind::message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormVerdict {
    pub fields: Vec<FieldVerdict>,
}

impl FormVerdict {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldVerdict::is_valid)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldVerdict> {
        self.fields.iter().filter(|v| !v.is_valid())
    }

    pub fn error_for(&self, field: FieldName) -> Option<ErrorKind> {
        self.fields
            .iter()
            .find(|v| v.field == field)
            .and_then(|v| v.error)
    }
}

/// Which of the extended fields a registration variant shows, and whether each is
/// required. `None` means the field is not on the form at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormRules {
    pub cedula: Option<Requirement>,
    pub age: Option<Requirement>,
    pub sector: Option<Requirement>,
    pub birth_date: Option<Requirement>,
    pub profession: Option<Requirement>,
}

impl FormRules {
    /// Names, phone, email and sports only.
    pub fn basic() -> Self {
        Self::default()
    }

    /// The variant that also asks for cédula, age and (optional) sector.
    pub fn identity() -> Self {
        Self {
            cedula: Some(Requirement::Required),
            age: Some(Requirement::Required),
            sector: Some(Requirement::Optional),
            ..Self::default()
        }
    }

    /// The variant with optional birth date and profession.
    pub fn profile() -> Self {
        Self {
            birth_date: Some(Requirement::Optional),
            profession: Some(Requirement::Optional),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub sports: Vec<String>,
    pub cedula: String,
    pub age: String,
    pub sector: String,
    pub birth_date: String,
    pub profession: String,
    pub gender: Option<Gender>,
}

/// A single edit to a [`RegistrationForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormChange {
    FirstName(String),
    LastName(String),
    Phone(String),
    Email(String),
    Cedula(String),
    Age(String),
    Sector(String),
    BirthDate(String),
    Profession(String),
    Gender(Option<Gender>),
    AddSport(String),
    RemoveSport(String),
    MoveSport { from: usize, to: usize },
}

impl RegistrationForm {
    /// Returns the form after `change`. Phone and cédula go through their formatters.
    pub fn apply(self, change: FormChange) -> Self {
        match change {
            FormChange::FirstName(v) => Self {
                first_name: v,
                ..self
            },
            FormChange::LastName(v) => Self {
                last_name: v,
                ..self
            },
            FormChange::Phone(v) => Self {
                phone: format_phone(&v),
                ..self
            },
            FormChange::Email(v) => Self { email: v, ..self },
            FormChange::Cedula(v) => Self {
                cedula: format_cedula(&v),
                ..self
            },
            FormChange::Age(v) => Self { age: v, ..self },
            FormChange::Sector(v) => Self { sector: v, ..self },
            FormChange::BirthDate(v) => Self {
                birth_date: v,
                ..self
            },
            FormChange::Profession(v) => Self {
                profession: v,
                ..self
            },
            FormChange::Gender(g) => Self { gender: g, ..self },
            FormChange::AddSport(sport) => {
                let mut sports = self.sports;
                if !sport.trim().is_empty() && !sports.contains(&sport) {
                    sports.push(sport);
                }
                Self { sports, ..self }
            }
            FormChange::RemoveSport(sport) => {
                let sports = self.sports.into_iter().filter(|s| *s != sport).collect();
                Self { sports, ..self }
            }
            FormChange::MoveSport { from, to } => {
                let mut sports = self.sports;
                if from < sports.len() {
                    let sport = sports.remove(from);
                    let to = to.min(sports.len());
                    sports.insert(to, sport);
                }
                Self { sports, ..self }
            }
        }
    }

    pub fn validate(&self, rules: &FormRules, today: NaiveDate) -> FormVerdict {
        let mut fields = vec![
            FieldInput::FirstName(&self.first_name).check(Requirement::Required),
            FieldInput::LastName(&self.last_name).check(Requirement::Required),
            FieldInput::Phone(&self.phone).check(Requirement::Required),
            FieldInput::Email(&self.email).check(Requirement::Required),
            FieldInput::Sports(&self.sports).check(Requirement::Required),
        ];

        let extended = [
            (rules.cedula, FieldInput::Cedula(&self.cedula)),
            (rules.age, FieldInput::Age(&self.age)),
            (rules.sector, FieldInput::Sector(&self.sector)),
            (
                rules.birth_date,
                FieldInput::BirthDate {
                    value: &self.birth_date,
                    today,
                },
            ),
            (rules.profession, FieldInput::Profession(&self.profession)),
        ];
        for (rule, input) in extended {
            if let Some(requirement) = rule {
                fields.push(input.check(requirement));
            }
        }

        FormVerdict { fields }
    }

    /// Builds the create request, or returns the failing verdict.
    pub fn into_request(
        self,
        rules: &FormRules,
        today: NaiveDate,
    ) -> Result<CreateRegistrationRequest> {
        let verdict = self.validate(rules, today);
        if !verdict.is_valid() {
            return Err(CheckinError::Validation(verdict));
        }

        let sports = self
            .sports
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(CreateRegistrationRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: format_phone(&self.phone),
            email: self.email.trim().to_string(),
            sports,
            birth_date: rules
                .birth_date
                .and_then(|_| NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d").ok()),
            gender: self.gender,
            profession: rules.profession.and_then(|_| non_blank(&self.profession)),
            cedula: rules.cedula.and_then(|_| non_blank(&format_cedula(&self.cedula))),
            edad: rules.age.and_then(|_| self.age.trim().parse().ok()),
            sector: rules.sector.and_then(|_| non_blank(&self.sector)),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The ticket page's "edit my contact data" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdateForm {
    pub phone: String,
    pub email: String,
}

impl ContactUpdateForm {
    pub fn validate(&self) -> FormVerdict {
        FormVerdict {
            fields: vec![
                FieldInput::Phone(&self.phone).check(Requirement::Required),
                FieldInput::Email(&self.email).check(Requirement::Required),
            ],
        }
    }

    pub fn into_request(self) -> Result<ContactUpdateRequest> {
        let verdict = self.validate();
        if !verdict.is_valid() {
            return Err(CheckinError::Validation(verdict));
        }
        Ok(ContactUpdateRequest {
            email: Some(self.email.trim().to_string()),
            phone: Some(format_phone(&self.phone)),
        })
    }
}
