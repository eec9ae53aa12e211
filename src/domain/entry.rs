//! Journal entry model

use crate::domain::Mood;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single persisted journal entry.
///
/// `mood` and `time` are kept as the stored strings so that entries read
/// from a hand-edited store survive a round trip unchanged. Decoding is
/// lenient: a missing field reads as empty and a non-string value reads as
/// its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub mood: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl JournalEntry {
    /// Create an entry; `text` is expected to be trimmed and non-empty
    pub fn new(mood: Mood, text: String, time: DateTime<Utc>) -> Self {
        JournalEntry {
            mood: mood.label().to_string(),
            text,
            time: time.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// The mood, if the stored label belongs to the vocabulary
    pub fn known_mood(&self) -> Option<Mood> {
        Mood::from_label(&self.mood)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// First `max_chars` characters of the text
    pub fn preview(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}
