use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for watermeter
/// CLI application to track daily water intake with SQLite
#[derive(Parser)]
#[command(
    name = "watermeter",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple water tracking CLI: log intakes, follow your daily goal, and browse history",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the oplog table")]
        print: bool,
    },

    /// Log a water intake
    Add {
        /// Amount to log, in milliliters
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Delete a logged intake by id
    Del {
        /// Record id (shown by `today` and `history`)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Show today's intake against the daily goal
    Today {
        #[arg(long = "all", help = "List every record of the day, not only the latest")]
        all: bool,
    },

    /// Browse intake history grouped by date, most recent first
    History {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, START:END)"
        )]
        period: Option<String>,
    },

    /// Show or update the daily goal (ml)
    Goal {
        #[arg(long = "set", value_name = "ML", allow_negative_numbers = true)]
        set: Option<i64>,
    },

    /// Show or manage the quick-add preset amounts (ml)
    Quick {
        #[arg(long = "add", value_name = "ML", allow_negative_numbers = true)]
        add: Option<i64>,

        #[arg(long = "remove", value_name = "ML", allow_negative_numbers = true)]
        remove: Option<i64>,
    },

    /// Export intake history
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            required_unless_present = "clipboard",
            conflicts_with = "clipboard"
        )]
        file: Option<String>,

        #[arg(long, help = "Copy the export payload to the system clipboard")]
        clipboard: bool,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        period: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
