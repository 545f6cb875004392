use crate::forms::FormVerdict;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown backend status: {0}")]
    UnknownStatus(String),

    #[error("Form has {} invalid field(s)", .0.errors().count())]
    Validation(FormVerdict),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CheckinError>;
