//! Shared classification and formatting pipeline for Obscura's unified-log
//! triage tools.
//!
//! One pass over ndjson from `log show --style ndjson`:
//! parse → gap tracking → classification → emission, in input order. The
//! three report modes are configurations of the same pipeline, not separate
//! algorithms.

pub mod classify;
mod error;
pub mod gap;
pub mod level;
pub mod pipeline;
pub mod record;
pub mod timefmt;

pub use error::Error;
pub use pipeline::{
    SleepConfig, SummaryConfig, TextConfig, run_sleeps, run_summary, run_text,
};
