//! # Field Validators
//!
//! Pure predicates over raw user input. A validator never mutates its input, never fails
//! and never decides whether a field is required: an empty string is just another input
//! that yields `false` (or `true` for the optional free-text fields). The caller, see
//! [`crate::forms`], turns these booleans into [`crate::messages::ErrorKind`]s.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_AGE: i64 = 5;
pub const MAX_AGE: i64 = 120;
pub const MAX_FREE_TEXT_CHARS: usize = 100;
pub const CEDULA_PROVINCES: std::ops::RangeInclusive<u32> = 1..=24;

const CEDULA_WEIGHTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

static PHONE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-()]").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^09[0-9]{8}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,50}$").unwrap());

/// Ecuadorian mobile number: `09` followed by eight digits.
///
/// Spaces, dashes and parentheses are ignored, so `"099 123 4567"` is accepted. A
/// valid input is therefore not always in formatter shape; only formatter output is
/// (`format_phone(s) == s` holds for valid `s` without separators).
pub fn validate_phone(phone: &str) -> bool {
    let clean = PHONE_SEPARATORS.replace_all(phone, "");
    PHONE_RE.is_match(&clean)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// First or last name: 2 to 50 letters (accented vowels and ñ included) or spaces.
pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Ecuadorian national id (cédula).
///
/// Ten digits; the first two are a province code in `01..=24` and the last one is a
/// check digit over the first nine (weights `2,1,2,…`, products above 9 reduced by 9,
/// verifier `(10 - sum % 10) % 10`). Whitespace is ignored.
pub fn validate_cedula(cedula: &str) -> bool {
    let clean: String = cedula.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.len() != 10 || !clean.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = clean.bytes().map(|b| u32::from(b - b'0')).collect();

    let province = digits[0] * 10 + digits[1];
    if !CEDULA_PROVINCES.contains(&province) {
        return false;
    }

    cedula_check_digit(&digits[..9]) == digits[9]
}

/// Check digit for the first nine digits of a cédula.
pub fn cedula_check_digit(first_nine: &[u32]) -> u32 {
    let sum: u32 = first_nine
        .iter()
        .zip(CEDULA_WEIGHTS)
        .map(|(digit, weight)| {
            let product = digit * weight;
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

pub fn validate_age(age: i64) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// Age typed as text. Anything that is not a whole number is invalid.
pub fn validate_age_input(input: &str) -> bool {
    input
        .trim()
        .parse::<i64>()
        .map(validate_age)
        .unwrap_or(false)
}

/// Sector or profession. Empty passes; whether it may be empty is the form's call.
pub fn validate_free_text(text: &str) -> bool {
    text.chars().count() <= MAX_FREE_TEXT_CHARS
}

/// Birth date as `YYYY-MM-DD`, with the implied age at `today` inside the age range.
pub fn validate_birth_date(input: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        Ok(birth) => validate_age(age_at(birth, today)),
        Err(_) => false,
    }
}

/// Whole years between `birth` and `today`. Negative for dates in the future.
pub fn age_at(birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut years = i64::from(today.year()) - i64::from(birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// At least one sport picked.
pub fn validate_sports<S: AsRef<str>>(sports: &[S]) -> bool {
    sports.iter().any(|s| !s.as_ref().trim().is_empty())
}
