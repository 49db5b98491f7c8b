//! Implementation of the `obslog sleeps` command.

use std::io::{BufWriter, stdout};
use std::path::Path;

use anyhow::Result;
use chrono::Duration;
use obslog_core::timefmt::TimeFormat;
use obslog_core::{SleepConfig, run_sleeps};

use super::{ignore_broken_pipe, open_log};
use crate::cli::TimeArgs;

pub fn run(path: &Path, min_seconds: u32, time: &TimeArgs) -> Result<()> {
    let config = SleepConfig {
        min_gap: Duration::seconds(i64::from(min_seconds)),
        time: TimeFormat::parse(&time.zone, time.date)?,
    };
    tracing::debug!(?config, "running sleep report");

    let reader = open_log(path)?;
    let writer = BufWriter::new(stdout().lock());

    ignore_broken_pipe(run_sleeps(reader, writer, &config))?;
    Ok(())
}
