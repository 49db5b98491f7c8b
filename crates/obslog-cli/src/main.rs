use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use obslog_cli::commands::{sleeps, summary, text};
use obslog_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support. Diagnostics go to
    // stderr; stdout carries only the report itself.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Commands::Sleeps {
            path,
            min_seconds,
            time,
        } => sleeps::run(path, *min_seconds, time),
        Commands::Summary { path, level, time } => summary::run(path, *level, time),
        Commands::Text {
            path,
            level,
            obscura,
            ui,
            time,
        } => text::run(path, *level, *obscura, *ui, time),
    }
}
