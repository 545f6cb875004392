//! Keystroke formatters. They shape what the user can type; they do not validate.

pub const PHONE_DIGITS: usize = 10;
pub const CEDULA_DIGITS: usize = 10;

/// Digits only, at most ten.
pub fn format_phone(value: &str) -> String {
    digits_truncated(value, PHONE_DIGITS)
}

/// Same rule as [`format_phone`].
pub fn format_cedula(value: &str) -> String {
    digits_truncated(value, CEDULA_DIGITS)
}

fn digits_truncated(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}
