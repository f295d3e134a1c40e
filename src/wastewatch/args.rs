use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wastewatch", version)]
#[command(about = "Submit, look up and track waste pickup reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding reports and configuration (defaults to $WASTEWATCH_HOME,
    /// then the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new report
    #[command(alias = "new")]
    Submit {
        /// Your name
        name: String,

        /// Where the problem is
        address: String,

        /// What the problem is
        issue: String,
    },

    /// Look up a report by id (e.g. RPT1234, case does not matter)
    #[command(alias = "s")]
    Status {
        /// Report id
        id: Option<String>,
    },

    /// Show the report you submitted last
    #[command(alias = "last")]
    Confirm,

    /// List all reports, newest first
    #[command(alias = "ls")]
    History,

    /// Delete one report
    #[command(alias = "rm")]
    Delete {
        /// Report id, exactly as shown (e.g. RPT1234)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all reports
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Follow the pickup truck
    Track {
        /// Delay between updates, overriding track-interval-ms
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (track-interval-ms, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
