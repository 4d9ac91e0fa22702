//! # Guestlist CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!               guestlist library (api.rs inward)
//! ```
//!
//! Terminal output is produced from templates in `cli/templates/`, embedded
//! at compile time with `include_str!()` and styled through a `style` filter
//! backed by `console`. Logging goes to stderr through `tracing-subscriber`,
//! filtered by `GUESTLIST_LOG` (or `debug` with `--verbose`).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
