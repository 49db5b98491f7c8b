//! Inter-record gap tracking for sleep inference.

use chrono::{DateTime, Duration, FixedOffset};

/// Running state over the timestamped subsequence of the input.
///
/// Gap tracking and content classification are independent consumers of the
/// same stream: every timestamped record feeds the tracker, whether or not
/// that record is itself emitted.
#[derive(Debug, Default)]
pub struct GapTracker {
    last: Option<DateTime<FixedOffset>>,
    max_delta: Option<(Duration, DateTime<FixedOffset>)>,
}

impl GapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next timestamped record.
    ///
    /// Returns the delta from the previous timestamped record; the first
    /// record never produces a delta. The running maximum advances on strict
    /// greater-than, so ties keep the earliest-seen maximum.
    pub fn observe(&mut self, timestamp: DateTime<FixedOffset>) -> Option<Duration> {
        let delta = self.last.map(|last| timestamp - last);

        if let Some(delta) = delta {
            if self.max_delta.is_none_or(|(max, _)| delta > max) {
                self.max_delta = Some((delta, timestamp));
            }
        }

        self.last = Some(timestamp);
        delta
    }

    /// The largest delta seen and when it ended. `None` until two
    /// timestamped records have been observed.
    pub fn max_delta(&self) -> Option<(Duration, DateTime<FixedOffset>)> {
        self.max_delta
    }
}

/// Render a delta as `H:MM:SS`, with a day-count prefix and a microsecond
/// suffix only when nonzero, e.g. `0:01:30` or `1 day, 2:03:04.500000`.
pub fn format_delta(delta: Duration) -> String {
    const DAY_MICROS: i64 = 86_400_000_000;

    let total_micros = delta.num_microseconds().unwrap_or(0);
    let days = total_micros.div_euclid(DAY_MICROS);
    let rem = total_micros.rem_euclid(DAY_MICROS);

    let seconds = rem / 1_000_000;
    let micros = rem % 1_000_000;
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);

    let mut rendered = String::new();
    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        rendered.push_str(&format!("{days} {unit}, "));
    }
    rendered.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros != 0 {
        rendered.push_str(&format!(".{micros:06}"));
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_timestamp;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        parse_timestamp(raw).expect("valid test timestamp")
    }

    #[test]
    fn first_record_produces_no_delta() {
        let mut gaps = GapTracker::new();
        assert!(gaps.observe(ts("2024-01-01T10:00:00-05:00")).is_none());
        assert!(gaps.max_delta().is_none());
    }

    #[test]
    fn deltas_are_consecutive_differences() {
        let mut gaps = GapTracker::new();
        gaps.observe(ts("2024-01-01T10:00:00-05:00"));
        let delta = gaps.observe(ts("2024-01-01T10:01:30-05:00"));
        assert_eq!(delta, Some(Duration::seconds(90)));
    }

    #[test]
    fn max_is_the_largest_consecutive_delta() {
        let mut gaps = GapTracker::new();
        gaps.observe(ts("2024-01-01T10:00:00-05:00"));
        gaps.observe(ts("2024-01-01T10:00:30-05:00"));
        gaps.observe(ts("2024-01-01T10:05:30-05:00"));
        gaps.observe(ts("2024-01-01T10:06:00-05:00"));

        let (max, at) = gaps.max_delta().expect("max observed");
        assert_eq!(max, Duration::minutes(5));
        assert_eq!(at, ts("2024-01-01T10:05:30-05:00"));
    }

    #[test]
    fn ties_keep_the_earliest_maximum() {
        let mut gaps = GapTracker::new();
        gaps.observe(ts("2024-01-01T10:00:00-05:00"));
        gaps.observe(ts("2024-01-01T10:01:00-05:00"));
        gaps.observe(ts("2024-01-01T10:02:00-05:00"));

        let (max, at) = gaps.max_delta().expect("max observed");
        assert_eq!(max, Duration::minutes(1));
        assert_eq!(at, ts("2024-01-01T10:01:00-05:00"));
    }

    #[test]
    fn format_delta_matches_report_style() {
        assert_eq!(format_delta(Duration::seconds(90)), "0:01:30");
        assert_eq!(format_delta(Duration::seconds(0)), "0:00:00");
        assert_eq!(format_delta(Duration::hours(2) + Duration::seconds(4)), "2:00:04");
        assert_eq!(
            format_delta(Duration::days(1) + Duration::milliseconds(500)),
            "1 day, 0:00:00.500000"
        );
        assert_eq!(format_delta(Duration::days(2)), "2 days, 0:00:00");
    }
}
