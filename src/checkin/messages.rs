//! # Error Message Catalog
//!
//! Every validation failure the core can report is one [`ErrorKind`]. Each kind maps to
//! exactly one user-facing Spanish message; the match in [`ErrorKind::message`] is
//! exhaustive, so adding a kind without a message does not compile.
//!
//! Localisation would key the lookup by `(ErrorKind, locale)`; today the catalog is
//! fixed to `es`.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NameRequired,
    NameInvalid,
    PhoneRequired,
    PhoneInvalid,
    EmailRequired,
    EmailInvalid,
    SportsRequired,
    CedulaRequired,
    CedulaInvalid,
    AgeRequired,
    AgeOutOfRange,
    SectorRequired,
    SectorTooLong,
    ProfessionRequired,
    ProfessionTooLong,
    BirthDateRequired,
    BirthDateInvalid,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 17] = [
        ErrorKind::NameRequired,
        ErrorKind::NameInvalid,
        ErrorKind::PhoneRequired,
        ErrorKind::PhoneInvalid,
        ErrorKind::EmailRequired,
        ErrorKind::EmailInvalid,
        ErrorKind::SportsRequired,
        ErrorKind::CedulaRequired,
        ErrorKind::CedulaInvalid,
        ErrorKind::AgeRequired,
        ErrorKind::AgeOutOfRange,
        ErrorKind::SectorRequired,
        ErrorKind::SectorTooLong,
        ErrorKind::ProfessionRequired,
        ErrorKind::ProfessionTooLong,
        ErrorKind::BirthDateRequired,
        ErrorKind::BirthDateInvalid,
    ];

    /// The message shown next to the offending field.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NameRequired => "El nombre es requerido",
            ErrorKind::NameInvalid => "El nombre solo puede contener letras",
            ErrorKind::PhoneRequired => "El teléfono es requerido",
            ErrorKind::PhoneInvalid => "El teléfono debe tener 10 dígitos y empezar con 09",
            ErrorKind::EmailRequired => "El correo electrónico es requerido",
            ErrorKind::EmailInvalid => "El correo electrónico no es válido",
            ErrorKind::SportsRequired => "Debes seleccionar al menos un deporte",
            ErrorKind::CedulaRequired => "La cédula es requerida",
            ErrorKind::CedulaInvalid => "Cédula inválida",
            ErrorKind::AgeRequired => "La edad es requerida",
            ErrorKind::AgeOutOfRange => "La edad debe estar entre 5 y 120 años",
            ErrorKind::SectorRequired => "El sector es requerido",
            ErrorKind::SectorTooLong => "El sector no puede tener más de 100 caracteres",
            ErrorKind::ProfessionRequired => "La profesión es requerida",
            ErrorKind::ProfessionTooLong => "La profesión no puede tener más de 100 caracteres",
            ErrorKind::BirthDateRequired => "La fecha de nacimiento es requerida",
            ErrorKind::BirthDateInvalid => {
                "La fecha de nacimiento no es válida o la edad no está entre 5 y 120 años"
            }
        }
    }

    /// Stable machine tag, used for JSON output.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NameRequired => "NAME_REQUIRED",
            ErrorKind::NameInvalid => "NAME_INVALID",
            ErrorKind::PhoneRequired => "PHONE_REQUIRED",
            ErrorKind::PhoneInvalid => "PHONE_INVALID",
            ErrorKind::EmailRequired => "EMAIL_REQUIRED",
            ErrorKind::EmailInvalid => "EMAIL_INVALID",
            ErrorKind::SportsRequired => "SPORTS_REQUIRED",
            ErrorKind::CedulaRequired => "CEDULA_REQUIRED",
            ErrorKind::CedulaInvalid => "CEDULA_INVALID",
            ErrorKind::AgeRequired => "EDAD_REQUIRED",
            ErrorKind::AgeOutOfRange => "EDAD_INVALID",
            ErrorKind::SectorRequired => "SECTOR_REQUIRED",
            ErrorKind::SectorTooLong => "SECTOR_TOO_LONG",
            ErrorKind::ProfessionRequired => "PROFESSION_REQUIRED",
            ErrorKind::ProfessionTooLong => "PROFESSION_TOO_LONG",
            ErrorKind::BirthDateRequired => "BIRTH_DATE_REQUIRED",
            ErrorKind::BirthDateInvalid => "BIRTH_DATE_INVALID",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_has_a_message() {
        for kind in ErrorKind::ALL {
            assert!(!kind.message().is_empty(), "{:?} has no message", kind);
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = ErrorKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_known_messages() {
        assert_eq!(ErrorKind::CedulaInvalid.message(), "Cédula inválida");
        assert_eq!(
            ErrorKind::AgeOutOfRange.to_string(),
            "La edad debe estar entre 5 y 120 años"
        );
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&ErrorKind::PhoneInvalid).unwrap();
        assert_eq!(json, "\"PHONE_INVALID\"");
    }
}
