use crate::error::{GuestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Highest numbered table in the venue.
pub const MAX_TABLE: u8 = 22;
/// Guests an attendee may bring along, at most.
pub const MAX_GUESTS: u8 = 8;

const PRINCIPAL_TOKEN: &str = "principal";

/// Where an attendee sits: the head table or one of the numbered tables.
///
/// Snapshots store the table as its text token (`"principal"`, `"1"`..`"22"`),
/// so the same value compares and serializes uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Table {
    Principal,
    Numbered(u8),
}

impl Table {
    pub fn numbered(n: u8) -> Result<Self> {
        if (1..=MAX_TABLE).contains(&n) {
            Ok(Table::Numbered(n))
        } else {
            Err(GuestError::InvalidTable(n.to_string()))
        }
    }

    /// Converts a spreadsheet number into a table. Only whole numbers in
    /// range are accepted.
    pub fn from_number(n: f64) -> Option<Self> {
        if n.fract() != 0.0 || n < 1.0 || n > f64::from(MAX_TABLE) {
            return None;
        }
        Some(Table::Numbered(n as u8))
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::Numbered(1)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Principal => write!(f, "{}", PRINCIPAL_TOKEN),
            Table::Numbered(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Table {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.eq_ignore_ascii_case(PRINCIPAL_TOKEN) {
            return Ok(Table::Principal);
        }
        token
            .parse::<u8>()
            .ok()
            .and_then(|n| Table::numbered(n).ok())
            .ok_or_else(|| GuestError::InvalidTable(s.to_string()))
    }
}

impl TryFrom<String> for Table {
    type Error = GuestError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Table> for String {
    fn from(table: Table) -> Self {
        table.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendeeStatus {
    Arrived,
    Missing,
    Pending,
}

/// Snapshot records are checked on the way in: an attendee can't be both
/// arrived and missing, and the guest count stays within [`MAX_GUESTS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredAttendee")]
pub struct Attendee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub table: Table,
    pub guest_count: u8,
    pub arrived: bool,
    pub missing: bool,
}

impl Attendee {
    /// Creates a pending attendee with a fresh id. Names are trimmed and the
    /// guest count is capped at [`MAX_GUESTS`].
    pub fn new(first_name: &str, last_name: &str, table: Table, guest_count: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            table,
            guest_count: guest_count.min(MAX_GUESTS),
            arrived: false,
            missing: false,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn status(&self) -> AttendeeStatus {
        if self.arrived {
            AttendeeStatus::Arrived
        } else if self.missing {
            AttendeeStatus::Missing
        } else {
            AttendeeStatus::Pending
        }
    }

    /// Flips `arrived`. Marking someone as arrived clears `missing`.
    pub fn toggle_arrived(&mut self) {
        self.arrived = !self.arrived;
        if self.arrived {
            self.missing = false;
        }
    }

    /// Flips `missing`. Marking someone as missing clears `arrived`.
    pub fn toggle_missing(&mut self) {
        self.missing = !self.missing;
        if self.missing {
            self.arrived = false;
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAttendee {
    id: Uuid,
    first_name: String,
    last_name: String,
    table: Table,
    guest_count: u8,
    arrived: bool,
    missing: bool,
}

impl TryFrom<StoredAttendee> for Attendee {
    type Error = GuestError;

    fn try_from(stored: StoredAttendee) -> Result<Self> {
        if stored.arrived && stored.missing {
            return Err(GuestError::Validation(format!(
                "attendee {} is marked both arrived and missing",
                stored.id
            )));
        }
        if stored.guest_count > MAX_GUESTS {
            return Err(GuestError::Validation(format!(
                "attendee {} brings {} guests (max {})",
                stored.id, stored.guest_count, MAX_GUESTS
            )));
        }
        Ok(Self {
            id: stored.id,
            first_name: stored.first_name,
            last_name: stored.last_name,
            table: stored.table,
            guest_count: stored.guest_count,
            arrived: stored.arrived,
            missing: stored.missing,
        })
    }
}
