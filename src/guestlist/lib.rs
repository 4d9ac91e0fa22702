//! # Guestlist Architecture
//!
//! Guestlist tracks who is invited to an event, where they sit, how many
//! guests they bring and whether they showed up at the door. It is a
//! **UI-agnostic library** that happens to ship with a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the canonical attendee list                         │
//! │  - Parses selectors, persists after every change            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a `Vec<Attendee>`               │
//! │  - No I/O assumptions beyond reading an import file         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over one whole-list snapshot    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Views
//!
//! Nothing the user sees is stored. Every `list` recomputes the filtered
//! subset ([`filter`]), slices it into pages ([`pagination`]) and counts
//! arrivals over the unfiltered list ([`filter::Stats`]).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`) and never writes to stdout or stderr.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic,
//!    driven by plain lists and the `StoreFixture` builder.
//! 2. **API** (`api.rs`): Dispatch and persistence, using `InMemoryStore`
//!    (including stores that fail to load or save).
//! 3. **CLI** (`tests/`): The built binary against a temporary data
//!    directory, via `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Attendee`, `Table`)
//! - [`filter`]: Search, table and status filters plus stats
//! - [`pagination`]: Pages and the view state behind `list`
//! - [`selector`]: Positions and ids that point at attendees
//! - [`sheet`]: Spreadsheet and CSV reading
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod selector;
pub mod sheet;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
