//! # CLI Behavior
//!
//! This is **one possible UI client** for guestlist, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! For the overall architecture, see the library documentation in
//! `guestlist`.
//!
//! ### Naked Execution (`guestlist`)
//!
//! Running `guestlist` with no arguments defaults to `guestlist list`: stats
//! for the whole event followed by the first page of attendees.
//!
//! ### Pointing at Attendees
//!
//! `list` numbers attendees by their position in the full list. The number
//! does not change when filtering or paging, so `guestlist list -s ana`
//! followed by `guestlist arrived 14` always hits the same person. Attendee
//! ids are accepted too.
//!
//! ### Clearing
//!
//! `guestlist clear` asks for confirmation on stdin. `-y` skips the prompt.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (list rows, stats, messages)
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Terminal styling theme
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
