use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "guestlist",
    bin_name = "guestlist",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Guest list and door check-in for events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the guest list and config
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Attendee,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Attendee => "Per-Attendee Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "stats" => Some(CommandGroup::Core),
            "arrived" | "missing" | "delete" => Some(CommandGroup::Attendee),
            "import" | "clear" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Attendee,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("guestlist {version}\n"));
    output.push_str("Guest list and door check-in for events\n");
    output.push('\n');
    output.push_str("Usage: guestlist [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding the guest list and config\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Name of the subcommand a parsed command line refers to.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Core(c) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List { .. } => "list",
            CoreCommands::Stats => "stats",
        },
        Commands::Attendee(c) => match c {
            AttendeeCommands::Arrived { .. } => "arrived",
            AttendeeCommands::Missing { .. } => "missing",
            AttendeeCommands::Delete { .. } => "delete",
        },
        Commands::Data(c) => match c {
            DataCommands::Import { .. } => "import",
            DataCommands::Clear { .. } => "clear",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
    }
}

/// Prints help for a command by name. Unknown names fall back to the
/// grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Attendee(AttendeeCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add an attendee
    #[command(alias = "a", display_order = 1)]
    Add {
        first_name: String,

        last_name: String,

        /// Table: 1-22 or "principal" (defaults to the default-table setting)
        #[arg(short, long)]
        table: Option<String>,

        /// Accompanying guests, 0-8 (larger values are capped)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        guests: i64,
    },

    /// List attendees
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term, matched against "first last"
        #[arg(short, long)]
        search: Option<String>,

        /// Only this table (1-22 or principal; 0 or all for every table)
        #[arg(short, long)]
        table: Option<String>,

        /// Only attendees with this status: all, arrived, missing, pending
        #[arg(long)]
        status: Option<String>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show arrival counts
    #[command(display_order = 3)]
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum AttendeeCommands {
    /// Toggle arrival for one or more attendees
    #[command(display_order = 10)]
    Arrived {
        /// Positions from `list` or attendee ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Toggle absence for one or more attendees
    #[command(display_order = 11)]
    Missing {
        /// Positions from `list` or attendee ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete one or more attendees
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Positions from `list` or attendee ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Import attendees from a spreadsheet (first sheet, header row skipped)
    #[command(display_order = 20)]
    Import {
        /// Path to a .xlsx, .xls, .xlsm, .xlsb, .ods or .csv file
        path: PathBuf,
    },

    /// Remove every attendee
    #[command(display_order = 21)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (page-size, import-extensions, default-table)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for guestlist or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
