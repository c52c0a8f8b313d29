//! Display-only derivations over a signal record.
//!
//! Pure functions recomputed per call; nothing here mutates the record or
//! caches results on it.

use crate::signals::record::{Direction, SignalRecord};

/// Shown when the entry time did not parse.
pub const TIME_PLACEHOLDER: &str = "--";

/// Percent move from entry to target, rounded to one decimal place.
///
/// Unknown on either price stays unknown - never zero, never a panic. A
/// non-finite result (zero entry price) is also unknown.
pub fn variation_percent(record: &SignalRecord) -> Option<f64> {
    let entry = record.entry_price?;
    let target = record.target_price?;
    let pct = (target - entry) / entry * 100.0;
    if !pct.is_finite() {
        return None;
    }
    Some((pct * 10.0).round() / 10.0)
}

/// LONG exactly; everything else is the sell bucket.
pub fn is_long(record: &SignalRecord) -> bool {
    record.direction == Direction::Long
}

/// Buy/sell label for the direction bucket.
pub fn direction_label(record: &SignalRecord) -> &'static str {
    if is_long(record) {
        "BUY"
    } else {
        "SELL"
    }
}

/// DD/MM/YYYY, or the placeholder when the entry time is malformed.
pub fn format_date(record: &SignalRecord) -> String {
    match record.entry_at {
        Some(at) => at.format("%d/%m/%Y").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

/// HH:MM, or the placeholder when the entry time is malformed.
pub fn format_time(record: &SignalRecord) -> String {
    match record.entry_at {
        Some(at) => at.format("%H:%M").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(direction: Direction, entry: Option<f64>, target: Option<f64>) -> SignalRecord {
        let entry_time = "2024-01-01 10:05:00".to_string();
        SignalRecord {
            symbol: "BTCUSDT".to_string(),
            direction,
            entry_price: entry,
            entry_at: SignalRecord::parse_entry_time(&entry_time),
            entry_time,
            target_price: target,
            target_exit_time: "2024-01-02 10:00:00".to_string(),
            status: "OPEN".to_string(),
            quality_score: Some(95.0),
            signal_class: "Sinais Premium".to_string(),
            strategy_info: "trend-follow".to_string(),
        }
    }

    #[test]
    fn test_variation_percent() {
        let r = record(Direction::Long, Some(50000.0), Some(52000.0));
        assert_eq!(variation_percent(&r), Some(4.0));
    }

    #[test]
    fn test_variation_percent_rounds_to_one_decimal() {
        let r = record(Direction::Short, Some(3000.0), Some(2900.0));
        assert_eq!(variation_percent(&r), Some(-3.3));
    }

    #[test]
    fn test_variation_percent_unknown_price_propagates() {
        let r = record(Direction::Long, None, Some(52000.0));
        assert_eq!(variation_percent(&r), None);

        let r = record(Direction::Long, Some(50000.0), None);
        assert_eq!(variation_percent(&r), None);
    }

    #[test]
    fn test_variation_percent_zero_entry_is_unknown() {
        let r = record(Direction::Long, Some(0.0), Some(52000.0));
        assert_eq!(variation_percent(&r), None);
    }

    #[test]
    fn test_direction_bucketing() {
        let long = record(Direction::Long, None, None);
        assert!(is_long(&long));
        assert_eq!(direction_label(&long), "BUY");

        let short = record(Direction::Short, None, None);
        assert!(!is_long(&short));
        assert_eq!(direction_label(&short), "SELL");
    }

    #[test]
    fn test_date_and_time_formatting() {
        let r = record(Direction::Long, None, None);
        assert_eq!(format_date(&r), "01/01/2024");
        assert_eq!(format_time(&r), "10:05");
    }

    #[test]
    fn test_formatting_degrades_to_placeholder() {
        let mut r = record(Direction::Long, None, None);
        r.entry_time = "garbage".to_string();
        r.entry_at = None;

        assert_eq!(format_date(&r), TIME_PLACEHOLDER);
        assert_eq!(format_time(&r), TIME_PLACEHOLDER);
    }
}
