use crate::commands::{CmdMessage, CmdResult};
use crate::model::Attendee;
use crate::stats::filter_attendees;

pub fn run(attendees: &[Attendee], term: &str) -> CmdResult {
    let matches: Vec<Attendee> = filter_attendees(attendees, term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No attendees match \"{}\".", term)));
    }
    result.with_attendees(matches)
}
