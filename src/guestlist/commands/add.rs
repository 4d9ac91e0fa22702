use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GuestError, Result};
use crate::model::{Attendee, Table};

use super::helpers::clamp_guests;

pub fn run(
    attendees: &mut Vec<Attendee>,
    first_name: &str,
    last_name: &str,
    table: Table,
    guests: i64,
) -> Result<CmdResult> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(GuestError::Validation(
            "First and last name are both required".to_string(),
        ));
    }

    let attendee = Attendee::new(first_name, last_name, table, clamp_guests(guests));
    attendees.push(attendee.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} (table {}, {} guests)",
        attendee.full_name(),
        attendee.table,
        attendee.guest_count
    )));
    Ok(result.with_affected(vec![attendee]))
}
