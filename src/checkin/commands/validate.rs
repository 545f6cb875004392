use crate::commands::{CmdMessage, CmdResult};
use crate::forms::{FormRules, RegistrationForm};
use chrono::NaiveDate;

pub fn run(form: &RegistrationForm, rules: &FormRules, today: NaiveDate) -> CmdResult {
    let verdict = form.validate(rules, today);

    let mut result = CmdResult::default();
    if verdict.is_valid() {
        result.add_message(CmdMessage::success("All fields are valid."));
    } else {
        for field in verdict.errors() {
            if let Some(message) = field.message() {
                result.add_message(CmdMessage::error(message));
            }
        }
    }
    result.with_verdict(verdict)
}
