//! The three report runners.
//!
//! Each is one synchronous pass: raw line → parse → gap tracking →
//! classification → emission, preserving input order. They differ only in
//! configuration and rendering, not in pipeline shape.

use std::io::{BufRead, Write};

use chrono::Duration;

use crate::classify::{self, Route};
use crate::error::Error;
use crate::gap::{GapTracker, format_delta};
use crate::level::{self, Level};
use crate::record::{self, EventType, LogRecord};
use crate::timefmt::TimeFormat;

/// Configuration for the sleep-transition report.
#[derive(Debug, Clone)]
pub struct SleepConfig {
    /// Minimum gap between consecutive records to report inline.
    pub min_gap: Duration,
    pub time: TimeFormat,
}

/// Configuration for the leveled/pattern summary.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Rust-library records matching no pattern still show when at least
    /// this severe.
    pub min_level: Level,
    pub time: TimeFormat,
}

/// Configuration for the generic filtered dump.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Minimum severity to display; unranked records always pass.
    pub min_level: Level,
    pub time: TimeFormat,
    /// Restrict output to our own processes.
    pub obscura_only: bool,
    /// Include the UI subsystems normally suppressed.
    pub show_ui: bool,
}

/// Extract sleep/wake transitions and flag gaps with no logs at all (the
/// machine was presumably asleep). Ends with the single largest gap, once at
/// least one gap has been observed.
pub fn run_sleeps(
    reader: impl BufRead,
    mut out: impl Write,
    config: &SleepConfig,
) -> Result<(), Error> {
    let mut gaps = GapTracker::new();

    for (index, line) in reader.lines().enumerate() {
        let record = record::parse_line(&line?, index + 1)?;

        let Some(timestamp) = record.timestamp else {
            tracing::debug!(line = index + 1, "record without timestamp, skipping");
            continue;
        };

        if classify::is_sleep_transition(&record) {
            writeln!(
                out,
                "{}{}",
                config.time.format(timestamp),
                record.event_message
            )?;
        }

        if let Some(delta) = gaps.observe(timestamp) {
            if delta >= config.min_gap {
                writeln!(
                    out,
                    "{}sleep for {}",
                    config.time.format(timestamp),
                    format_delta(delta)
                )?;
            }
        }
    }

    if let Some((delta, at)) = gaps.max_delta() {
        writeln!(
            out,
            "max sleep {} at {}",
            format_delta(delta),
            config.time.format(at).trim_end()
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Summarize tunnel lifecycle messages, routed per subsystem.
pub fn run_summary(
    reader: impl BufRead,
    mut out: impl Write,
    config: &SummaryConfig,
) -> Result<(), Error> {
    for (index, line) in reader.lines().enumerate() {
        let record = record::parse_line(&line?, index + 1)?;

        if record.event_type != Some(EventType::LogEvent) {
            continue;
        }

        let Some(rendered) = summarize(&record, config.min_level) else {
            continue;
        };

        let Some(timestamp) = record.timestamp else {
            tracing::debug!(line = index + 1, "record without timestamp, skipping");
            continue;
        };

        writeln!(out, "{}{rendered}", config.time.format(timestamp))?;
    }

    out.flush()?;
    Ok(())
}

/// Decide whether a summary-mode record is shown, and with which text.
fn summarize(record: &LogRecord, min_level: Level) -> Option<&str> {
    let message = record.event_message.as_str();
    match Route::of(record) {
        Route::Rust => {
            if classify::matches_rust_patterns(message) {
                Some(message)
            } else if message.contains(classify::RACE_START_MARKER) {
                Some(classify::RACE_START_BANNER)
            } else if level::rank_of(record.message_type.as_deref()) >= min_level.rank() {
                Some(message)
            } else {
                None
            }
        }
        Route::Swift => classify::matches_swift_patterns(message).then_some(message),
        Route::Kernel => {
            (message == classify::KERNEL_SLEEP_MESSAGE).then_some(classify::KERNEL_SLEEP_BANNER)
        }
        Route::Other => None,
    }
}

/// Dump every record that survives the type, identity, severity, and UI
/// gates, with full context.
pub fn run_text(reader: impl BufRead, mut out: impl Write, config: &TextConfig) -> Result<(), Error> {
    for (index, line) in reader.lines().enumerate() {
        let record = record::parse_line(&line?, index + 1)?;

        if record.is_finished() {
            writeln!(out, "Finished")?;
            continue;
        }

        if classify::is_ignored_type(record.event_type) {
            continue;
        }

        let Some(timestamp) = record.timestamp else {
            tracing::debug!(line = index + 1, "record without timestamp, skipping");
            continue;
        };
        let prefix = config.time.format(timestamp);

        if record.event_type == Some(EventType::TimesyncEvent) {
            writeln!(out, "{prefix}timesyncEvent")?;
            continue;
        }

        if config.obscura_only && !classify::is_own_process(&record.process_image_path) {
            continue;
        }

        if level::rank_of(record.message_type.as_deref()) < config.min_level.rank() {
            continue;
        }

        if !config.show_ui && classify::is_ui_subsystem(&record.subsystem) {
            continue;
        }

        writeln!(
            out,
            "{prefix}{} {}:{}:{} | {}",
            level::letter_of(record.message_type.as_deref()),
            record.process_image_path,
            record.subsystem,
            record.category,
            record.event_message
        )?;
    }

    out.flush()?;
    Ok(())
}
