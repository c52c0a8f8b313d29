use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout the feed uses for entry times.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Directional classification of a signal (buy-side vs sell-side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Normalizes raw feed text. Matching is case-insensitive; any value
    /// that is not LONG lands in the sell bucket.
    pub fn from_feed(raw: &str) -> Direction {
        if raw.trim().eq_ignore_ascii_case("long") {
            Direction::Long
        } else {
            Direction::Short
        }
    }
}

/// One trade recommendation as parsed from the feed.
///
/// Immutable after parse. Numeric fields are `None` when the feed value did
/// not parse - "unknown", never zero. Records are discarded in bulk when
/// the repository installs a newer set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub symbol: String,
    pub direction: Direction,
    pub entry_price: Option<f64>,
    /// Raw feed text, kept for display.
    pub entry_time: String,
    /// Parsed instant used for ordering; `None` when `entry_time` is
    /// malformed.
    pub entry_at: Option<NaiveDateTime>,
    pub target_price: Option<f64>,
    pub target_exit_time: String,
    pub status: String,
    pub quality_score: Option<f64>,
    pub signal_class: String,
    pub strategy_info: String,
}

impl SignalRecord {
    pub fn parse_entry_time(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw.trim(), ENTRY_TIME_FORMAT).ok()
    }
}
