//! How users point at attendees.
//!
//! `list` prints each attendee with its 1-based position in the full list
//! (the position does not change with filters or pages). Commands that act on
//! attendees accept that position, or the attendee's UUID for scripting.

use crate::error::{GuestError, Result};
use crate::model::Attendee;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Id(Uuid),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "{}", n),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selector {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Ok(Selector::Position(n));
        }
        Uuid::parse_str(s)
            .map(Selector::Id)
            .map_err(|_| GuestError::Api(format!("Invalid attendee selector: {}", s)))
    }
}

impl Selector {
    /// Index into `attendees`, if the selector points at someone.
    pub fn resolve(&self, attendees: &[Attendee]) -> Option<usize> {
        match self {
            Selector::Position(0) => None,
            Selector::Position(n) => (*n <= attendees.len()).then(|| n - 1),
            Selector::Id(id) => attendees.iter().position(|a| &a.id == id),
        }
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<Selector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
