use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shifttrack
/// CLI application to log shifts and follow weekly hours and earnings
#[derive(Parser)]
#[command(
    name = "shifttrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work shifts and track weekly hours, remaining hours and net earnings",
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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Log a shift
    Add {
        /// Day the shift starts (YYYY-MM-DD, `today` or `yesterday`)
        date: String,

        #[arg(long = "in", value_name = "HH:MM", help = "Shift start time")]
        start: String,

        #[arg(long = "out", value_name = "HH:MM", help = "Shift end time")]
        end: String,

        #[arg(
            long = "out-date",
            value_name = "DATE",
            help = "Day the shift ends, for shifts past midnight (default: same day)"
        )]
        out_date: Option<String>,
    },

    /// Delete a shift by id (full id or the prefix shown by `list`)
    Del {
        id: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List logged shifts, newest first
    List {
        #[arg(long = "week", help = "Only shifts of the current week")]
        week: bool,
    },

    /// Hours and earnings for the current week
    Summary {
        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Show or change pay and week settings
    Settings {
        #[arg(long = "wage", allow_hyphen_values = true, help = "Hourly wage")]
        wage: Option<String>,

        #[arg(
            long = "tax",
            value_name = "PERCENT",
            allow_hyphen_values = true,
            help = "Tax rate in percent, e.g. 12"
        )]
        tax: Option<String>,

        #[arg(
            long = "week-start",
            value_name = "DAY",
            help = "First day of the week: 1-7 (1 = Monday) or a weekday name"
        )]
        week_start: Option<String>,
    },

    /// Restore default settings and delete every shift
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Compact weekly summary for status bars and widgets
    Widget {
        #[arg(long = "json", help = "Print the snapshot as JSON")]
        json: bool,

        #[arg(long = "watch", help = "Recompute on the configured refresh interval")]
        watch: bool,

        #[arg(long = "placeholder", hide = true)]
        placeholder: bool,
    },

    /// Export shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "week", help = "Only shifts of the current week")]
        week: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
