//! Turns raw feed text into signal records. Pure transform, no I/O.

use tracing::warn;

use crate::error::RowError;
use crate::signals::record::{Direction, SignalRecord};

// Column offsets in the feed (0-indexed). The layout is a hard external
// contract with the feed producer; the unnamed columns in between carry
// exit bookkeeping this pipeline does not consume.
const COL_SYMBOL: usize = 0;
const COL_TYPE: usize = 1;
const COL_ENTRY_PRICE: usize = 2;
const COL_ENTRY_TIME: usize = 3;
const COL_TARGET_PRICE: usize = 4;
const COL_TARGET_EXIT_TIME: usize = 5;
const COL_STATUS: usize = 6;
const COL_QUALITY_SCORE: usize = 10;
const COL_SIGNAL_CLASS: usize = 11;
const COL_STRATEGY_INFO: usize = 15;

/// Minimum columns a row must carry to cover every mapped offset.
pub const MIN_COLUMNS: usize = COL_STRATEGY_INFO + 1;

/// Parses raw feed text into records ordered by entry time, most recent
/// first.
///
/// The first line is the header and is dropped without inspection; blank
/// lines are skipped. Malformed rows are dropped individually and never
/// abort the rest of the feed.
pub fn parse_feed(text: &str) -> Vec<SignalRecord> {
    let mut records: Vec<SignalRecord> = text
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match parse_row(line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("[PARSER] Dropping feed line {}: {}", index + 1, e);
                None
            }
        })
        .collect();

    // Stable sort keeps feed order for equal timestamps. `None` (an entry
    // time that did not parse) orders below every parsed instant, so those
    // rows land at the tail of the descending order.
    records.sort_by(|a, b| b.entry_at.cmp(&a.entry_at));
    records
}

/// Parses one data row.
///
/// Splits on comma with no quoting support: a field containing a comma
/// shifts every later column (known feed limitation). A row with fewer
/// than [`MIN_COLUMNS`] columns fails as a whole, as does one missing its
/// symbol or type.
pub fn parse_row(line: &str) -> Result<SignalRecord, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_COLUMNS {
        return Err(RowError::ColumnCount {
            expected: MIN_COLUMNS,
            found: fields.len(),
        });
    }

    let symbol = fields[COL_SYMBOL].trim();
    if symbol.is_empty() {
        return Err(RowError::MissingField("symbol"));
    }
    let raw_type = fields[COL_TYPE].trim();
    if raw_type.is_empty() {
        return Err(RowError::MissingField("type"));
    }

    let entry_time = fields[COL_ENTRY_TIME].trim().to_string();
    Ok(SignalRecord {
        symbol: symbol.to_string(),
        direction: Direction::from_feed(raw_type),
        entry_price: parse_number(fields[COL_ENTRY_PRICE]),
        entry_at: SignalRecord::parse_entry_time(&entry_time),
        entry_time,
        target_price: parse_number(fields[COL_TARGET_PRICE]),
        target_exit_time: fields[COL_TARGET_EXIT_TIME].trim().to_string(),
        status: fields[COL_STATUS].trim().to_string(),
        quality_score: parse_number(fields[COL_QUALITY_SCORE]),
        signal_class: fields[COL_SIGNAL_CLASS].trim().to_string(),
        strategy_info: fields[COL_STRATEGY_INFO].trim().to_string(),
    })
}

/// Locale-invariant decimal parse. Anything that is not a full decimal
/// number is unknown (`None`), never zero.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
