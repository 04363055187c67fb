use clap::{Parser, Subcommand};

/// Command-line interface definition for dtlogger
/// CLI application to log machine downtime per line, day and head
#[derive(Parser)]
#[command(
    name = "dtlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift-downtime logger: record per-head machine status on 39 production lines and review efficiency",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show or change the planned days
    Days {
        #[arg(long = "count", help = "Number of planned days (1-10)")]
        count: Option<usize>,

        #[arg(
            long = "set",
            num_args = 2,
            value_names = ["DAY", "DATE"],
            help = "Set the date of a day: --set 2 2025-03-04 (empty DATE clears it)"
        )]
        set: Option<Vec<String>>,

        #[arg(long = "reset", help = "Regenerate consecutive days starting today")]
        reset: bool,

        #[arg(
            long = "start",
            requires = "reset",
            help = "First date used by --reset (YYYY-MM-DD)"
        )]
        start: Option<String>,
    },

    /// Show the heads of a line for a day
    Show {
        /// Line name or number (default: configured default line)
        line: Option<String>,

        #[arg(long, short, help = "Day: date, label (\"Day 2\") or number")]
        day: Option<String>,
    },

    /// Change the status of one head
    Set {
        /// Line name or number
        line: String,

        #[arg(long = "head", help = "Head number (1-14)")]
        head: u8,

        #[arg(long, short, help = "Day: date, label (\"Day 2\") or number")]
        day: Option<String>,

        #[arg(long = "offline", help = "Active or Offline")]
        offline: Option<String>,

        #[arg(
            long = "issue",
            help = "None, Chute, Operator, Load Cell, Detached Head, Stepper Motor Error, Hopper Issues, Installed Wrong"
        )]
        issue: Option<String>,

        #[arg(long = "repaired", help = "N/A, Fixed or Not Fixed")]
        repaired: Option<String>,

        #[arg(long = "notes", help = "Free-text notes for the head")]
        notes: Option<String>,
    },

    /// Mark a line as running (yes) or stopped (no)
    Running {
        /// Line name or number
        line: String,

        /// yes | no
        state: String,

        #[arg(long, short, help = "Day: date, label (\"Day 2\") or number")]
        day: Option<String>,
    },

    /// Set the machine notes of a line for a day
    Notes {
        /// Line name or number
        line: String,

        /// Notes text (empty string clears them)
        text: String,

        #[arg(long, short, help = "Day: date, label (\"Day 2\") or number")]
        day: Option<String>,
    },

    /// Running lines, efficiencies, downtime per day and issue distribution
    Dashboard {
        #[arg(long, short, help = "Day: date, label (\"Day 2\") or number")]
        day: Option<String>,

        #[arg(long = "expand", help = "List every line inside each section")]
        expand: bool,
    },

    /// Offline heads per line and day
    Summary {
        #[arg(long, short, conflicts_with = "all", help = "Day: date, label or number")]
        day: Option<String>,

        #[arg(long = "all", help = "Cover all planned days (default)")]
        all: bool,

        #[arg(long = "line", help = "Only this line (\"All Lines\" for every line)")]
        line: Option<String>,

        #[arg(long = "issue", help = "Only rows whose issues contain this text")]
        issue: Option<String>,

        #[arg(long = "head", help = "Only rows where this head is offline")]
        head: Option<String>,

        #[arg(long = "options", help = "List the available issue and head filter values")]
        options: bool,

        #[arg(long = "export", value_name = "PATH", help = "Export rows as JSON (file or directory)")]
        export: Option<String>,

        #[arg(long = "import", value_name = "FILE", conflicts_with = "export", help = "Show rows from an exported JSON file")]
        import: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Change history of head edits
    History {
        #[arg(long = "line", help = "Only this line (\"All Lines\" for every line)")]
        line: Option<String>,

        #[arg(long = "head", help = "Only this head number (\"All Heads\" for every head)")]
        head: Option<String>,

        #[arg(long = "export", value_name = "FILE", help = "Export the filtered entries as CSV")]
        export: Option<String>,

        #[arg(long = "delete", value_name = "ID", help = "Delete one history entry")]
        delete: Option<u64>,

        #[arg(long = "clear", conflicts_with = "delete", help = "Delete all history entries")]
        clear: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Clear all saved dates, records and history
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
