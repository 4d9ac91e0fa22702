use crate::commands::CmdResult;
use crate::filter::Stats;
use crate::model::Attendee;

pub fn run(attendees: &[Attendee]) -> CmdResult {
    CmdResult::default().with_stats(Stats::compute(attendees))
}
