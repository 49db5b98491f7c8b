//! Timestamp rendering across one or more display zones.

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

use crate::error::Error;

/// How a timestamp is converted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSelector {
    /// The host's time zone.
    Local,
    /// The offset embedded in the record, unchanged.
    Source,
    Utc,
    /// An explicit IANA zone, e.g. `America/Toronto`.
    Named(Tz),
}

/// Multi-zone rendering configuration, built once per run and shared
/// read-only by the emitters.
#[derive(Debug, Clone)]
pub struct TimeFormat {
    zones: Vec<ZoneSelector>,
    show_date: bool,
}

impl TimeFormat {
    /// Parse a comma-separated zone spec.
    ///
    /// An empty spec disables timestamp rendering entirely; an unrecognized
    /// zone name is a configuration error, never silently dropped.
    pub fn parse(spec: &str, show_date: bool) -> Result<Self, Error> {
        let mut zones = Vec::new();
        if !spec.is_empty() {
            for part in spec.split(',') {
                zones.push(match part {
                    "local" => ZoneSelector::Local,
                    "source" => ZoneSelector::Source,
                    "utc" => ZoneSelector::Utc,
                    name => ZoneSelector::Named(
                        name.parse()
                            .map_err(|_| Error::UnknownZone(name.to_string()))?,
                    ),
                });
            }
        }
        Ok(Self { zones, show_date })
    }

    /// Render one timestamp: one segment per configured zone, in selector
    /// order, each with a trailing space. Sub-second precision is truncated
    /// to milliseconds. Empty zone list renders the empty string.
    pub fn format(&self, timestamp: DateTime<FixedOffset>) -> String {
        let pattern = if self.show_date {
            "%Y-%m-%d %H:%M:%S%.3f "
        } else {
            "%H:%M:%S%.3f "
        };

        let mut rendered = String::new();
        for zone in &self.zones {
            let segment = match zone {
                ZoneSelector::Local => timestamp.with_timezone(&Local).format(pattern).to_string(),
                ZoneSelector::Source => timestamp.format(pattern).to_string(),
                ZoneSelector::Utc => timestamp.with_timezone(&Utc).format(pattern).to_string(),
                ZoneSelector::Named(tz) => timestamp.with_timezone(tz).format(pattern).to_string(),
            };
            rendered.push_str(&segment);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_timestamp;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        parse_timestamp(raw).expect("valid test timestamp")
    }

    #[test]
    fn source_zone_is_identity_on_embedded_offset() {
        let fmt = TimeFormat::parse("source", false).unwrap();
        assert_eq!(fmt.format(ts("2024-01-01T10:00:00.000-05:00")), "10:00:00.000 ");
    }

    #[test]
    fn utc_converts_from_embedded_offset() {
        let fmt = TimeFormat::parse("utc", false).unwrap();
        assert_eq!(fmt.format(ts("2024-01-01T10:00:00.000-05:00")), "15:00:00.000 ");
    }

    #[test]
    fn named_zone_converts() {
        let fmt = TimeFormat::parse("America/Toronto", false).unwrap();
        assert_eq!(fmt.format(ts("2024-01-01T15:00:00.000+00:00")), "10:00:00.000 ");
    }

    #[test]
    fn unknown_zone_is_fatal() {
        let err = TimeFormat::parse("Mars/Olympus_Mons", false).expect_err("should fail");
        assert_eq!(err.to_string(), "unknown time zone: Mars/Olympus_Mons");
    }

    #[test]
    fn empty_spec_suppresses_timestamps() {
        let fmt = TimeFormat::parse("", true).unwrap();
        assert_eq!(fmt.format(ts("2024-01-01T10:00:00.000-05:00")), "");
    }

    #[test]
    fn segments_concatenate_in_selector_order() {
        let fmt = TimeFormat::parse("source,utc", false).unwrap();
        assert_eq!(
            fmt.format(ts("2024-01-01T10:00:00.500-05:00")),
            "10:00:00.500 15:00:00.500 "
        );
    }

    #[test]
    fn date_included_when_requested() {
        let fmt = TimeFormat::parse("utc", true).unwrap();
        assert_eq!(
            fmt.format(ts("2024-01-01T23:30:00.000-05:00")),
            "2024-01-02 04:30:00.000 "
        );
    }

    #[test]
    fn subsecond_precision_truncates() {
        let fmt = TimeFormat::parse("source", false).unwrap();
        // 999.9ms must render as .999, not round up to the next second.
        assert_eq!(
            fmt.format(ts("2024-01-01T10:00:00.9999-05:00")),
            "10:00:00.999 "
        );
    }
}
