//! Severity ranking for "at least this severe" filtering.

use std::fmt;
use std::str::FromStr;

/// The five unified-log severities, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Default,
    Error,
    Fault,
}

/// Rank assigned to missing or unrecognized severity tags. Sorts above
/// `Fault`, so such records always pass a minimum-level gate.
pub const UNRANKED: u8 = 5;

impl Level {
    /// Position in the severity order, `Debug` = 0 through `Fault` = 4.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Default => 2,
            Self::Error => 3,
            Self::Fault => 4,
        }
    }

    /// Single-letter code used by the text dump.
    pub const fn letter(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Default => 'L',
            Self::Error => 'E',
            Self::Fault => 'F',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Default => "Default",
            Self::Error => "Error",
            Self::Fault => "Fault",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debug" => Ok(Self::Debug),
            "Info" => Ok(Self::Info),
            "Default" => Ok(Self::Default),
            "Error" => Ok(Self::Error),
            "Fault" => Ok(Self::Fault),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// Rank of a raw severity tag; missing and unrecognized tags are unranked.
pub fn rank_of(message_type: Option<&str>) -> u8 {
    message_type
        .and_then(|tag| tag.parse::<Level>().ok())
        .map_or(UNRANKED, Level::rank)
}

/// Single-letter code of a raw severity tag. The text dump distinguishes an
/// absent tag (`N`), the literal `unknown` marker (`U`), and anything else
/// unrecognized (`?`).
pub fn letter_of(message_type: Option<&str>) -> char {
    match message_type {
        None => 'N',
        Some("unknown") => 'U',
        Some(tag) => tag.parse::<Level>().map_or('?', Level::letter),
    }
}

/// Error type for unrecognized severity tags.
#[derive(Debug, Clone)]
pub struct UnknownLevel(String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        let variants = [
            Level::Debug,
            Level::Info,
            Level::Default,
            Level::Error,
            Level::Fault,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: Level = s.parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn ranks_are_ordered() {
        assert!(Level::Debug.rank() < Level::Info.rank());
        assert!(Level::Info.rank() < Level::Default.rank());
        assert!(Level::Default.rank() < Level::Error.rank());
        assert!(Level::Error.rank() < Level::Fault.rank());
        assert!(Level::Fault.rank() < UNRANKED);
    }

    #[test]
    fn missing_and_unrecognized_tags_are_unranked() {
        assert_eq!(rank_of(None), UNRANKED);
        assert_eq!(rank_of(Some("Verbose")), UNRANKED);
        assert_eq!(rank_of(Some("Error")), Level::Error.rank());
    }

    #[test]
    fn letters_cover_sentinels() {
        assert_eq!(letter_of(Some("Default")), 'L');
        assert_eq!(letter_of(None), 'N');
        assert_eq!(letter_of(Some("unknown")), 'U');
        assert_eq!(letter_of(Some("Verbose")), '?');
    }

    #[test]
    fn unknown_level_errors() {
        let result: Result<Level, _> = "debug".parse();
        let err = result.expect_err("lowercase tag should not parse");
        assert_eq!(err.to_string(), "unknown log level: debug");
    }
}
