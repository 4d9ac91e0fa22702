use super::DataStore;
use crate::error::{GuestError, Result};
use crate::model::Attendee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    attendees: Option<Vec<Attendee>>,
    fail_loads: bool,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose snapshot cannot be read, as if it were corrupt.
    pub fn failing_loads() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    /// A store that rejects every write, as if the disk were full.
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of successful snapshot writes so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Whether a snapshot currently exists.
    pub fn has_snapshot(&self) -> bool {
        self.attendees.is_some()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Attendee>> {
        if self.fail_loads {
            return Err(GuestError::Store("snapshot unreadable".to_string()));
        }
        Ok(self.attendees.clone().unwrap_or_default())
    }

    fn save(&mut self, attendees: &[Attendee]) -> Result<()> {
        if self.fail_saves {
            return Err(GuestError::Store("quota exceeded".to_string()));
        }
        self.attendees = Some(attendees.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.attendees = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Table;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        attendees: Vec<Attendee>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                attendees: Vec::new(),
            }
        }

        pub fn with_attendee(mut self, first: &str, last: &str, table: Table) -> Self {
            self.attendees.push(Attendee::new(first, last, table, 0));
            self.sync()
        }

        pub fn with_arrived(mut self, first: &str, last: &str, table: Table) -> Self {
            let mut a = Attendee::new(first, last, table, 0);
            a.arrived = true;
            self.attendees.push(a);
            self.sync()
        }

        pub fn with_missing(mut self, first: &str, last: &str, table: Table) -> Self {
            let mut a = Attendee::new(first, last, table, 0);
            a.missing = true;
            self.attendees.push(a);
            self.sync()
        }

        /// Adds `count` pending attendees named "Guest N", spread across tables.
        pub fn with_attendees(mut self, count: usize) -> Self {
            for i in 0..count {
                let table = Table::Numbered((i % 22) as u8 + 1);
                self.attendees
                    .push(Attendee::new(&format!("Guest {}", i + 1), "Test", table, 0));
            }
            self.sync()
        }

        pub fn attendees(&self) -> &[Attendee] {
            &self.attendees
        }

        fn sync(mut self) -> Self {
            self.store.save(&self.attendees).unwrap();
            self
        }
    }
}
