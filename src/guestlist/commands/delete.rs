use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Attendee;
use crate::selector::Selector;

use super::helpers::resolve_selectors;

/// Removes the selected attendees. Selectors matching nobody leave the list
/// untouched.
pub fn run(attendees: &mut Vec<Attendee>, selectors: &[Selector]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut indexes = resolve_selectors(attendees, selectors, &mut result);

    // Highest first so earlier removals don't shift later indexes
    indexes.sort_unstable_by(|a, b| b.cmp(a));
    let mut removed = Vec::with_capacity(indexes.len());
    for idx in indexes {
        removed.push(attendees.remove(idx));
    }
    removed.reverse();

    for attendee in &removed {
        result.add_message(CmdMessage::success(format!(
            "Deleted: {}",
            attendee.full_name()
        )));
    }
    Ok(result.with_affected(removed))
}
