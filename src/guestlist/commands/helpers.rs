use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Attendee, MAX_GUESTS};
use crate::selector::Selector;

/// Resolves selectors to list indexes, in the order given and without
/// duplicates. Selectors that match nobody get a warning on `result`.
pub fn resolve_selectors(
    attendees: &[Attendee],
    selectors: &[Selector],
    result: &mut CmdResult,
) -> Vec<usize> {
    let mut resolved = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector.resolve(attendees) {
            Some(idx) if !resolved.contains(&idx) => resolved.push(idx),
            Some(_) => {}
            None => result.add_message(CmdMessage::warning(format!(
                "No attendee matches {}",
                selector
            ))),
        }
    }
    resolved
}

/// Clamps any requested guest count into `[0, MAX_GUESTS]`.
pub fn clamp_guests(requested: i64) -> u8 {
    requested.clamp(0, i64::from(MAX_GUESTS)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn clamps_guest_counts() {
        assert_eq!(clamp_guests(-4), 0);
        assert_eq!(clamp_guests(3), 3);
        assert_eq!(clamp_guests(10), 8);
    }

    #[test]
    fn skips_duplicates_and_warns_on_misses() {
        let list = vec![Attendee::new("Ana", "Lopez", Table::Numbered(5), 0)];
        let mut result = CmdResult::default();
        let idx = resolve_selectors(
            &list,
            &[
                Selector::Position(1),
                Selector::Id(list[0].id),
                Selector::Position(7),
            ],
            &mut result,
        );
        assert_eq!(idx, vec![0]);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("7"));
    }
}
