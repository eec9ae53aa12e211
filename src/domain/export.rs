//! Export renderings of the journal history

use crate::domain::JournalEntry;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// en-US style `toLocaleString` shape, e.g. `1/17/2025, 9:30:00 AM`
const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render a stored timestamp in the given zone, falling back to the raw text
pub fn format_timestamp<Tz>(time: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(time)
        .map(|t| t.with_timezone(tz).format(LOCALE_FORMAT).to_string())
        .unwrap_or_else(|_| time.to_string())
}

/// Human-readable export in local time
pub fn to_plain_text(history: &[JournalEntry]) -> String {
    to_plain_text_in(history, &Local)
}

/// Human-readable export with timestamps rendered in `tz`
pub fn to_plain_text_in<Tz>(history: &[JournalEntry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    history
        .iter()
        .map(|e| {
            format!(
                "{} — {}\n{}\n\n",
                format_timestamp(&e.time, tz),
                e.mood,
                e.text
            )
        })
        .collect()
}

/// JSON array in the same representation the entry store writes
pub fn to_structured(history: &[JournalEntry]) -> serde_json::Result<String> {
    serde_json::to_string(history)
}
