//! # Storage Layer
//!
//! The whole guest list is persisted as a single snapshot: every mutation
//! rewrites it wholesale, there is no incremental diffing. The [`DataStore`]
//! trait hides where that snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. The snapshot is a JSON array in
//!   `guestlist-data.json` inside the data directory, written to a temporary
//!   file first and renamed into place.
//! - [`memory::InMemoryStore`]: No persistence, used by tests. Can be told to
//!   fail loads or saves so recovery paths can be exercised.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── guestlist-data.json   # Snapshot: JSON array of attendees
//! └── config.json           # GuestConfig
//! ```

use crate::error::Result;
use crate::model::Attendee;

pub mod fs;
pub mod memory;

/// Fixed, namespaced name of the snapshot file.
pub const SNAPSHOT_FILENAME: &str = "guestlist-data.json";

/// Abstract interface for snapshot storage.
pub trait DataStore {
    /// Load the full list. A missing snapshot is an empty list, not an error.
    fn load(&self) -> Result<Vec<Attendee>>;

    /// Overwrite the snapshot with the given list.
    fn save(&mut self, attendees: &[Attendee]) -> Result<()>;

    /// Erase the snapshot entirely.
    fn clear(&mut self) -> Result<()>;
}
