use crate::commands::{CmdMessage, CmdResult};
use crate::model::Attendee;
use crate::stats::{recent_check_ins, EventStats};

/// Aggregates plus the latest check-ins (in `attendees`, newest first).
pub fn run(attendees: &[Attendee], recent_limit: usize) -> CmdResult {
    let stats = EventStats::from_attendees(attendees);
    let recent = recent_check_ins(attendees, recent_limit)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if stats.total == 0 {
        result.add_message(CmdMessage::info("No records found."));
    }
    result.with_stats(stats).with_attendees(recent)
}
