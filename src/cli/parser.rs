use crate::dashboard::DateRange;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for roomledger
/// CLI application to reconcile Booking.com exports and derive hotel KPIs
#[derive(Parser)]
#[command(
    name = "roomledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ingest Booking.com exports, reconcile bookings in SQLite and show hotel KPIs",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
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

    /// Import a Booking.com export file (.csv, .xls, .xlsx)
    Import {
        /// Path of the export file
        file: String,

        /// Overwrite stored bookings when the import carries changed fields
        #[arg(long = "apply-updates")]
        apply_updates: bool,

        /// Analyze only: show new/duplicate/changed rows without writing
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// List stored bookings
    List {
        #[arg(long, help = "Filter by verbatim status code (e.g. OK, Storniert)")]
        status: Option<String>,

        #[arg(long, help = "Filter by booker country")]
        country: Option<String>,

        #[arg(long, help = "Show only cancelled bookings")]
        cancelled: bool,
    },

    /// Show the KPI dashboard
    Dashboard {
        #[arg(
            long,
            value_enum,
            default_value = "all",
            help = "Trailing check-in window: 7, 30, 90 or all"
        )]
        range: DateRange,
    },

    /// Export stored bookings
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
