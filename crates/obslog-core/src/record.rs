//! The unified-log record model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// Categorical tag of a unified-log record.
///
/// Tags outside the known vocabulary fold into `Unknown`, which the generic
/// dump suppresses together with the other ignored types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    LogEvent,
    ActivityCreateEvent,
    SignpostEvent,
    StateEvent,
    TimesyncEvent,
    UserActionEvent,
    #[serde(other)]
    Unknown,
}

/// One parsed log record.
///
/// Field absence is modeled explicitly: each consumer decides whether a
/// missing field means skip or abort. String fields default to empty, which
/// the classifiers treat the same as the unified log does (an empty
/// subsystem with process id 0 is the kernel sentinel).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Event time with the source zone offset embedded. `None` when the
    /// field is missing or empty; such records produce no time-based output
    /// and never feed the gap tracker.
    #[serde(default, deserialize_with = "de_timestamp")]
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Absent on the synthetic end-of-stream marker.
    #[serde(default)]
    pub event_type: Option<EventType>,

    /// Raw severity tag, ranked through [`crate::level`]. Kept as written so
    /// the text dump can distinguish absent, literal `unknown`, and other
    /// unrecognized tags.
    #[serde(default)]
    pub message_type: Option<String>,

    #[serde(default)]
    pub subsystem: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub process_image_path: String,

    #[serde(default, rename = "processID")]
    pub process_id: i64,

    /// `log show` appends `{"finished":1}` after the final record.
    #[serde(default)]
    pub finished: Option<u8>,

    #[serde(default)]
    pub event_message: String,
}

impl LogRecord {
    /// True for the synthetic end-of-stream marker.
    pub fn is_finished(&self) -> bool {
        self.finished == Some(1)
    }
}

/// Parse one input line. `line_no` is 1-based and used only for diagnostics.
pub fn parse_line(line: &str, line_no: usize) -> Result<LogRecord, Error> {
    serde_json::from_str(line).map_err(|source| Error::Malformed {
        line: line_no,
        source,
    })
}

/// Parse a record timestamp.
///
/// Accepts RFC 3339 as well as the `log show` shape
/// `2024-05-31 10:41:19.254421-0400`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).or_else(|_| {
        DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%z")
    })
}

/// An absent or empty timestamp is a tolerated gap; a present but
/// unparseable one means corrupt input and fails the line.
fn de_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    parse_timestamp(&raw)
        .map(Some)
        .map_err(serde::de::Error::custom)
}
