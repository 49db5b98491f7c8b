//! Implementation of the `obslog summary` command.

use std::io::{BufWriter, stdout};
use std::path::Path;

use anyhow::Result;
use obslog_core::level::Level;
use obslog_core::timefmt::TimeFormat;
use obslog_core::{SummaryConfig, run_summary};

use super::{ignore_broken_pipe, open_log};
use crate::cli::TimeArgs;

pub fn run(path: &Path, level: Level, time: &TimeArgs) -> Result<()> {
    let config = SummaryConfig {
        min_level: level,
        time: TimeFormat::parse(&time.zone, time.date)?,
    };
    tracing::debug!(?config, "running summary report");

    let reader = open_log(path)?;
    let writer = BufWriter::new(stdout().lock());

    ignore_broken_pipe(run_summary(reader, writer, &config))?;
    Ok(())
}
