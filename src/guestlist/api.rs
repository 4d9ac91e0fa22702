//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for every guestlist operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the canonical list**: it is loaded once from the [`DataStore`]
//!   when the facade is built and handed to commands as a plain slice
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing selectors into positions or ids)
//! - **Persists** after every mutation that changed the list
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Confirmation**: Asking before `clear` is up to the UI
//!
//! ## Storage Failures
//!
//! Storage is best effort. A snapshot that cannot be read is treated as an
//! empty list and a snapshot that cannot be written leaves the in-memory
//! list authoritative for the rest of the session. Both are logged with
//! `tracing::warn!` and never surface as errors.
//!
//! ## Generic Over DataStore
//!
//! `GuestApi<S: DataStore>` is generic over the storage backend:
//! - Production: `GuestApi<FileStore>`
//! - Testing: `GuestApi<InMemoryStore>`

use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::config::GuestConfig;
use crate::error::Result;
use crate::model::{Attendee, Table};
use crate::pagination::ViewState;
use crate::selector::parse_selectors;
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct GuestApi<S: DataStore> {
    store: S,
    attendees: Vec<Attendee>,
    data_dir: PathBuf,
    config: GuestConfig,
}

impl<S: DataStore> GuestApi<S> {
    pub fn new(store: S, data_dir: PathBuf, config: GuestConfig) -> Self {
        let attendees = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load the guest list, starting empty");
            Vec::new()
        });
        Self {
            store,
            attendees,
            data_dir,
            config,
        }
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GuestConfig {
        &self.config
    }

    /// Adds one attendee. Without a table the configured default is used.
    pub fn add_attendee(
        &mut self,
        first_name: &str,
        last_name: &str,
        table: Option<Table>,
        guests: i64,
    ) -> Result<CmdResult> {
        let table = table.unwrap_or(self.config.default_table);
        self.mutate(|list| commands::add::run(list, first_name, last_name, table, guests))
    }

    pub fn list_attendees(&self, view: &ViewState) -> Result<CmdResult> {
        commands::list::run(&self.attendees, view, self.config.page_size)
    }

    pub fn stats(&self) -> CmdResult {
        commands::stats::run(&self.attendees)
    }

    pub fn toggle_arrived<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        self.mutate(|list| commands::toggle::arrived(list, &selectors))
    }

    pub fn toggle_missing<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        self.mutate(|list| commands::toggle::missing(list, &selectors))
    }

    pub fn delete_attendees<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        self.mutate(|list| commands::delete::run(list, &selectors))
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        let config = self.config.clone();
        self.mutate(|list| commands::import::run(list, path, &config))
    }

    /// Empties the list and erases the snapshot.
    pub fn clear_all(&mut self) -> CmdResult {
        let result = commands::clear::run(&mut self.attendees);
        info!(removed = result.affected.len(), "cleared guest list");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not erase the saved guest list");
        }
        result
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Runs a command against the list and persists if anything changed.
    fn mutate<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Vec<Attendee>) -> Result<CmdResult>,
    {
        let before = self.attendees.clone();
        let result = op(&mut self.attendees)?;
        if self.attendees != before {
            info!(
                affected = result.affected.len(),
                total = self.attendees.len(),
                "guest list changed"
            );
            self.commit();
        }
        Ok(result)
    }

    fn commit(&mut self) {
        if let Err(e) = self.store.save(&self.attendees) {
            warn!(error = %e, "could not save the guest list");
        }
    }
}
