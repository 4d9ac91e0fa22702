use crate::commands::{CmdMessage, CmdResult};
use crate::model::Attendee;

/// Empties the list. Asking for confirmation is the caller's job.
pub fn run(attendees: &mut Vec<Attendee>) -> CmdResult {
    let removed = std::mem::take(attendees);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed all {} attendees",
        removed.len()
    )));
    result.with_affected(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn empties_the_list() {
        let mut list = vec![
            Attendee::new("Ana", "Lopez", Table::Numbered(5), 3),
            Attendee::new("Bob", "Ruiz", Table::Numbered(3), 1),
        ];
        let result = run(&mut list);
        assert!(list.is_empty());
        assert_eq!(result.affected.len(), 2);
    }
}
