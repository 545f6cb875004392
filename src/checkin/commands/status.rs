use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Status, WireStatus};
use crate::transform::{to_backend, to_presentation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDirection {
    ToBackend,
    ToPresentation,
}

/// Converts one status string. Unknown input still converts (to the pending value) but
/// gets a warning.
pub fn run(direction: StatusDirection, value: &str) -> CmdResult {
    let (converted, known) = match direction {
        StatusDirection::ToBackend => (to_backend(value), Status::from_label(value).is_some()),
        StatusDirection::ToPresentation => {
            (to_presentation(value), value.parse::<WireStatus>().is_ok())
        }
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(converted));
    if !known {
        result.add_message(CmdMessage::warning(format!(
            "Unknown status \"{}\", using {}",
            value, converted
        )));
    }
    result
}
