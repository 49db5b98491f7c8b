//! CLI subcommand implementations.
//!
//! Each command is a thin wrapper: open the input, build the pipeline
//! configuration, run the matching obslog-core runner against stdout.

pub mod sleeps;
pub mod summary;
pub mod text;

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result};
use obslog_core::Error;

/// Open the log archive for buffered line-by-line reading.
pub(crate) fn open_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Treat a broken stdout pipe (e.g. piped to `head`) as normal termination.
pub(crate) fn ignore_broken_pipe(result: Result<(), Error>) -> Result<(), Error> {
    match result {
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
