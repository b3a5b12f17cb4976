use crate::core::sort::SortColumn;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeTracker
/// CLI application to time named activities with SQLite
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity timer: start, finish and search timed events stored in SQLite",
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

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start timing a new event
    Start {
        /// Event name (required, surrounding blanks are trimmed)
        name: String,

        #[arg(long = "desc", short = 'd', help = "Optional description")]
        description: Option<String>,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM:SS",
            help = "Start timestamp to record instead of now"
        )]
        at: Option<String>,
    },

    /// Finish an event (default: the most recently started one in progress)
    Finish {
        /// Event id to finish
        id: Option<i64>,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM:SS",
            help = "End timestamp to record instead of now"
        )]
        at: Option<String>,
    },

    /// Show events in progress with their elapsed time
    Status,

    /// Search and list past events
    List {
        #[arg(
            long = "from",
            value_name = "YYYY-MM-DD",
            help = "Only events started on or after this date"
        )]
        from: Option<String>,

        #[arg(
            long = "to",
            value_name = "YYYY-MM-DD",
            help = "Only events started on or before this date"
        )]
        to: Option<String>,

        #[arg(
            long = "today",
            conflicts_with_all = ["from", "to"],
            help = "Only events started today"
        )]
        today: bool,

        #[arg(long = "name", help = "Name contains (case-sensitive)")]
        name: Option<String>,

        #[arg(long = "desc", help = "Description contains (case-sensitive)")]
        description: Option<String>,

        #[arg(
            long = "sort",
            value_enum,
            help = "Sort by column; repeat the same column to toggle descending"
        )]
        sort: Vec<SortColumn>,
    },

    /// Delete one or more events by id
    Del {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
