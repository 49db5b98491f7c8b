//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use obslog_core::level::Level;

/// Unified-log triage for sleep/wake behavior and client events.
///
/// Reads line-delimited JSON as produced by `log show --style ndjson` and
/// prints filtered, time-zone-normalized text.
#[derive(Debug, Parser)]
#[command(name = "obslog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract sleep/wake transitions and report periods with no logs at
    /// all (when the machine was presumably asleep).
    Sleeps {
        /// Path to the ndjson log archive.
        path: PathBuf,

        /// Minimum idle duration, in seconds, to report.
        #[arg(short = 's', long, default_value_t = 60)]
        min_seconds: u32,

        #[command(flatten)]
        time: TimeArgs,
    },

    /// Summarize tunnel lifecycle messages at or above a severity.
    Summary {
        /// Path to the ndjson log archive.
        path: PathBuf,

        /// Print all logs at or above this level.
        #[arg(short, long, default_value = "Fault")]
        level: Level,

        #[command(flatten)]
        time: TimeArgs,
    },

    /// Dump all records with full context, lightly filtered.
    Text {
        /// Path to the ndjson log archive.
        path: PathBuf,

        /// Minimum log level to print.
        #[arg(short, long, default_value = "Debug")]
        level: Level,

        /// Show only logs from our processes.
        #[arg(long)]
        obscura: bool,

        /// Show UI-related logs.
        #[arg(long)]
        ui: bool,

        #[command(flatten)]
        time: TimeArgs,
    },
}

/// Timestamp rendering options shared by all subcommands.
#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Show the date along with the time.
    #[arg(short, long)]
    pub date: bool,

    /// Comma-separated list of zones in which to display times. Each item
    /// is `source` (the zone the log was written in), `local` (your zone),
    /// `utc`, or an IANA zone name like `America/Toronto`. An empty string
    /// disables timestamps.
    #[arg(short, long, default_value = "source")]
    pub zone: String,
}
