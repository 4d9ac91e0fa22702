use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Attendee, AttendeeStatus};
use crate::selector::Selector;

use super::helpers::resolve_selectors;

/// Flips `arrived` on each selected attendee.
pub fn arrived(attendees: &mut [Attendee], selectors: &[Selector]) -> Result<CmdResult> {
    apply(attendees, selectors, Attendee::toggle_arrived)
}

/// Flips `missing` on each selected attendee.
pub fn missing(attendees: &mut [Attendee], selectors: &[Selector]) -> Result<CmdResult> {
    apply(attendees, selectors, Attendee::toggle_missing)
}

fn apply(
    attendees: &mut [Attendee],
    selectors: &[Selector],
    toggle: fn(&mut Attendee),
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let indexes = resolve_selectors(attendees, selectors, &mut result);

    for idx in indexes {
        let attendee = &mut attendees[idx];
        toggle(attendee);

        let state = match attendee.status() {
            AttendeeStatus::Arrived => "arrived",
            AttendeeStatus::Missing => "missing",
            AttendeeStatus::Pending => "pending",
        };
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            attendee.full_name(),
            idx + 1,
            state
        )));
        result.affected.push(attendee.clone());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn list() -> Vec<Attendee> {
        vec![
            Attendee::new("Ana", "Lopez", Table::Numbered(5), 3),
            Attendee::new("Bob", "Ruiz", Table::Numbered(3), 1),
        ]
    }

    #[test]
    fn arrived_then_missing_ends_missing() {
        let mut list = list();
        arrived(&mut list, &[Selector::Position(1)]).unwrap();
        missing(&mut list, &[Selector::Position(1)]).unwrap();
        assert!(!list[0].arrived);
        assert!(list[0].missing);
    }

    #[test]
    fn toggling_twice_restores_pending() {
        let mut list = list();
        arrived(&mut list, &[Selector::Position(2)]).unwrap();
        let result = arrived(&mut list, &[Selector::Position(2)]).unwrap();
        assert_eq!(list[1].status(), AttendeeStatus::Pending);
        assert!(result.messages[0].content.ends_with("pending"));
    }

    #[test]
    fn at_most_one_flag_after_any_sequence() {
        let mut list = list();
        let sel = [Selector::Id(list[0].id)];
        for step in 0..8 {
            if step % 3 == 0 {
                missing(&mut list, &sel).unwrap();
            } else {
                arrived(&mut list, &sel).unwrap();
            }
            assert!(!(list[0].arrived && list[0].missing));
        }
    }

    #[test]
    fn unknown_selector_only_warns() {
        let mut list = list();
        let before = list.clone();
        let result = arrived(&mut list, &[Selector::Position(9)]).unwrap();
        assert_eq!(list, before);
        assert!(result.affected.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
