use crate::commands::{CmdMessage, CmdResult};
use crate::format::{format_cedula, format_phone};
use crate::messages::ErrorKind;
use crate::validation::{validate_cedula, validate_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatField {
    Phone,
    Cedula,
}

/// Formatted value as an info message, plus a warning when it is still not valid.
pub fn run(field: FormatField, value: &str) -> CmdResult {
    let (formatted, valid) = match field {
        FormatField::Phone => {
            let f = format_phone(value);
            let valid = validate_phone(&f);
            (f, valid)
        }
        FormatField::Cedula => {
            let f = format_cedula(value);
            let valid = validate_cedula(&f);
            (f, valid)
        }
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(formatted));
    if !valid {
        result.add_message(CmdMessage::warning(match field {
            FormatField::Phone => ErrorKind::PhoneInvalid.message(),
            FormatField::Cedula => ErrorKind::CedulaInvalid.message(),
        }));
    }
    result
}
