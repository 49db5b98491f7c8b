//! Implementation of the `obslog text` command.

use std::io::{BufWriter, stdout};
use std::path::Path;

use anyhow::Result;
use obslog_core::level::Level;
use obslog_core::timefmt::TimeFormat;
use obslog_core::{TextConfig, run_text};

use super::{ignore_broken_pipe, open_log};
use crate::cli::TimeArgs;

pub fn run(path: &Path, level: Level, obscura: bool, ui: bool, time: &TimeArgs) -> Result<()> {
    let config = TextConfig {
        min_level: level,
        time: TimeFormat::parse(&time.zone, time.date)?,
        obscura_only: obscura,
        show_ui: ui,
    };
    tracing::debug!(?config, "running text dump");

    let reader = open_log(path)?;
    let writer = BufWriter::new(stdout().lock());

    ignore_broken_pipe(run_text(reader, writer, &config))?;
    Ok(())
}
