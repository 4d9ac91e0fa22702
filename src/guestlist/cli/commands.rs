//! # CLI Layer
//!
//! This module is **one possible UI client** for guestlist, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, the confirmation prompt)
//! - Installs the tracing subscriber
//! - Resolves where data lives on disk
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API over a `FileStore`
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_attendee_list, render_stats, render_text_list};
use super::setup::{
    command_name, print_grouped_help, print_help_for_command, AttendeeCommands, Cli, Commands,
    CoreCommands, DataCommands, MiscCommands,
};
use clap::Parser;
use directories::ProjectDirs;
use guestlist::api::GuestApi;
use guestlist::commands::config::ConfigAction;
use guestlist::config::GuestConfig;
use guestlist::error::{GuestError, Result};
use guestlist::filter::{StatusFilter, TableFilter};
use guestlist::model::Table;
use guestlist::pagination::ViewState;
use guestlist::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory.
pub const HOME_ENV: &str = "GUESTLIST_HOME";
/// Log filter directives, e.g. `GUESTLIST_LOG=guestlist=debug`.
pub const LOG_ENV: &str = "GUESTLIST_LOG";

struct AppContext {
    api: GuestApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Top level help is grouped, subcommand help is clap's own
    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                first_name,
                last_name,
                table,
                guests,
            } => handle_add(&mut ctx, &first_name, &last_name, table, guests),
            CoreCommands::List {
                search,
                table,
                status,
                page,
            } => handle_list(&mut ctx, search, table, status, page),
            CoreCommands::Stats => handle_stats(&mut ctx),
        },
        Some(Commands::Attendee(cmd)) => match cmd {
            AttendeeCommands::Arrived { selectors } => handle_arrived(&mut ctx, selectors),
            AttendeeCommands::Missing { selectors } => handle_missing(&mut ctx, selectors),
            AttendeeCommands::Delete { selectors } => handle_delete(&mut ctx, selectors),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Import { path } => handle_import(&mut ctx, path),
            DataCommands::Clear { yes } => handle_clear(&mut ctx, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_list(&mut ctx, None, None, None, 1),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// `--data-dir`, then `$GUESTLIST_HOME`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "guestlist", "guestlist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            GuestError::Config(format!(
                "could not determine a data directory, set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = GuestConfig::load_or_default(&data_dir);
    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: GuestApi::new(store, data_dir, config),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    first_name: &str,
    last_name: &str,
    table: Option<String>,
    guests: i64,
) -> Result<()> {
    let table = table.map(|t| t.parse::<Table>()).transpose()?;
    let result = ctx
        .api
        .add_attendee(first_name, last_name, table, guests)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    table: Option<String>,
    status: Option<String>,
    page: usize,
) -> Result<()> {
    let mut view = ViewState::new();
    if let Some(term) = search {
        view.set_search(term);
    }
    if let Some(table) = table {
        view.set_table(table.parse::<TableFilter>()?);
    }
    if let Some(status) = status {
        view.set_status(status.parse::<StatusFilter>()?);
    }
    view.set_page(page);

    let result = ctx.api.list_attendees(&view)?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
        println!();
    }
    print!("{}", render_attendee_list(&result.listed, result.page));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats();
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_arrived(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_arrived(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_missing(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_missing(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_attendees(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.attendees().len();
    if !yes {
        let prompt = format!("Remove all {} attendees? This cannot be undone. [y/N] ", count);
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }
    let result = ctx.api.clear_all();
    print_messages(&result.messages);
    Ok(())
}

/// Reads one line from stdin. Only `y`/`yes` (any case) confirms.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action)?;

    if key.is_none() {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
