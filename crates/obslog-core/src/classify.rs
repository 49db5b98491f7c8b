//! Classification predicates shared by the three report modes.
//!
//! Pattern sets are compiled once into statics; per-record work is a route
//! resolution followed by membership or prefix-anchored regex tests.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::{EventType, LogRecord};

/// Subsystem and category of kernel power-management transitions.
pub const POWERD_SUBSYSTEM: &str = "com.apple.powerd";
pub const SLEEP_WAKE_CATEGORY: &str = "sleepWake";

/// The tunnel extension, the Rust tunnel library, and the Swift client app.
pub const EXTENSION_SUBSYSTEM: &str = "net.obscura.vpn-client-app.system-network-extension";
pub const RUST_SUBSYSTEM: &str = "net.obscura.rust-apple";
pub const APP_SUBSYSTEM: &str = "net.obscura.vpn-client-app";

/// Message the kernel logs at sleep entry, and the banner it is rewritten to.
pub const KERNEL_SLEEP_MESSAGE: &str = "PMRD: trace point 0x18";
pub const KERNEL_SLEEP_BANNER: &str = "########## KERNEL SLEEP ##########";

/// Marker embedded in the relay-racing log line, and its rewrite.
pub const RACE_START_MARKER: &str = " message_id=\"eech6Ier\"";
pub const RACE_START_BANNER: &str = "Racing relays... CONNECTION ATTEMPT START";

/// Event types the generic dump never shows.
const IGNORED_TYPES: [EventType; 5] = [
    EventType::ActivityCreateEvent,
    EventType::SignpostEvent,
    EventType::StateEvent,
    EventType::Unknown,
    EventType::UserActionEvent,
];

/// Our own process identities, for the own-process allow-list.
const OUR_PROCESSES: [&str; 2] = ["Obscura VPN", EXTENSION_SUBSYSTEM];

/// UI chatter suppressed unless explicitly requested.
const UI_SUBSYSTEMS: [&str; 3] = [
    "com.apple.AppKit",
    "com.apple.CFBundle",
    "com.apple.defaults",
];

/// Prefix-anchored patterns for tunnel lifecycle messages logged by the Rust
/// library. Compiled with dot-matches-newline: several of these messages
/// carry multi-line bodies.
static RUST_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = [
        "creating tunnel  .*",
        "deriving connect error code for tunnel (creation|connect): .*",
        "finishing tunnel connection  .*",
        "Ignoring failure to update exit list: .*",
        "Selected exit  .*",
        "selected relay  .*",
        "tunnel connected",
        "\"preferred network path interface name:.*",
        "\"sleep entry .*",
        "\"startTunnel entry .*",
        "\"stopTunnel entry .*",
        "\"wake entry .*",
        ".* message_id=\"(3rOUXFti|Azzlo6j2|KT91bgvI|OfLfwKhf|TJ4nH30h|uQ0xQcPP|UROUZerU)\".*",
    ]
    .join("|");
    Regex::new(&format!("^(?s:{alternatives})")).expect("static pattern set compiles")
});

/// Prefix-anchored patterns for messages logged by the Swift app.
static SWIFT_PATTERNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^(?:NWPathMonitor event: .*)").expect("static pattern set compiles"));

/// Which handling branch a summary-mode record belongs to, resolved once per
/// record from subsystem and process identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The Rust tunnel library.
    Rust,
    /// The Swift client app.
    Swift,
    /// Kernel events carry an empty subsystem and process id 0.
    Kernel,
    Other,
}

impl Route {
    pub fn of(record: &LogRecord) -> Self {
        match record.subsystem.as_str() {
            RUST_SUBSYSTEM => Self::Rust,
            APP_SUBSYSTEM => Self::Swift,
            "" if record.process_id == 0 => Self::Kernel,
            _ => Self::Other,
        }
    }
}

/// True for records describing a sleep or wake transition.
pub fn is_sleep_transition(record: &LogRecord) -> bool {
    if record.event_type != Some(EventType::LogEvent) {
        return false;
    }

    if record.subsystem == POWERD_SUBSYSTEM
        && record.category == SLEEP_WAKE_CATEGORY
        && record.event_message.contains("from Deep Idle")
    {
        return true;
    }

    record.subsystem == EXTENSION_SUBSYSTEM
        && (record.event_message.contains("wake entry")
            || record.event_message.contains("sleep exit"))
}

/// Prefix-anchored match against the Rust-library pattern set.
pub fn matches_rust_patterns(message: &str) -> bool {
    RUST_PATTERNS.is_match(message)
}

/// Prefix-anchored match against the Swift-app pattern set.
pub fn matches_swift_patterns(message: &str) -> bool {
    SWIFT_PATTERNS.is_match(message)
}

/// True for event types the generic dump always suppresses.
pub fn is_ignored_type(event_type: Option<EventType>) -> bool {
    event_type.is_some_and(|t| IGNORED_TYPES.contains(&t))
}

pub fn is_own_process(process_image_path: &str) -> bool {
    OUR_PROCESSES.contains(&process_image_path)
}

pub fn is_ui_subsystem(subsystem: &str) -> bool {
    UI_SUBSYSTEMS.contains(&subsystem)
}
