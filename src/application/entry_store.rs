//! Append-only journal history on top of a substrate

use crate::domain::{detect_mood, generate_summary, JournalEntry, Mood};
use crate::error::{JournalError, Result};
use crate::infrastructure::Substrate;
use chrono::{DateTime, Utc};
use serde_json::value::RawValue;
use tracing::{debug, info, warn};

/// Substrate key holding the serialized history array
pub const HISTORY_KEY: &str = "journal-history";

/// Result of a successful append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub entry: JournalEntry,
    pub summary: String,
}

/// Owns the journal history stored under [`HISTORY_KEY`].
///
/// Every append re-reads the full history, pushes the new entry and writes
/// the whole array back. Stored records are carried over as their original
/// JSON text, so unknown fields and oddly shaped records survive an append.
/// Content that is not a JSON array is read as an empty history and is left
/// untouched until the next successful append.
pub struct EntryStore<S: Substrate> {
    substrate: S,
}

impl<S: Substrate> EntryStore<S> {
    pub fn new(substrate: S) -> Self {
        EntryStore { substrate }
    }

    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    /// Append an entry stamped with the current time
    pub fn append(&mut self, text: &str, mood: Option<Mood>) -> Result<SavedEntry> {
        self.append_at(text, mood, Utc::now())
    }

    /// Append an entry stamped with `time`.
    ///
    /// Fails with `EmptyEntry` for blank text and `UndetectableMood` when no
    /// mood is given and none can be inferred; neither writes anything.
    pub fn append_at(
        &mut self,
        text: &str,
        mood: Option<Mood>,
        time: DateTime<Utc>,
    ) -> Result<SavedEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::EmptyEntry);
        }

        let mood = match mood.or_else(|| detect_mood(text)) {
            Some(mood) => mood,
            None => {
                debug!("no mood selected or detected, entry rejected");
                return Err(JournalError::UndetectableMood);
            }
        };

        let entry = JournalEntry::new(mood, text.to_string(), time);

        let mut records = self.records()?;
        records.push(serde_json::value::to_raw_value(&entry)?);
        let serialized = serde_json::to_string(&records)?;
        self.substrate.set(HISTORY_KEY, &serialized)?;

        info!(mood = mood.name(), total = records.len(), "entry saved");

        Ok(SavedEntry {
            summary: generate_summary(text),
            entry,
        })
    }

    /// Entries oldest-first, as stored. Array elements that are not objects
    /// are skipped.
    pub fn history(&self) -> Result<Vec<JournalEntry>> {
        let entries: Vec<JournalEntry> = self
            .records()?
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_str(record.get()) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(index, error = %e, "skipping stored record that is not an entry");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    /// Stored array elements as their original JSON text
    fn records(&self) -> Result<Vec<Box<RawValue>>> {
        let Some(raw) = self.substrate.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(error = %e, "stored history is unparsable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Entries most-recent-first
    pub fn list(&self) -> Result<Vec<JournalEntry>> {
        let mut entries = self.history()?;
        entries.reverse();
        Ok(entries)
    }

    /// The stored history blob, verbatim (`[]` when nothing is stored)
    pub fn raw_history(&self) -> Result<String> {
        Ok(self
            .substrate
            .get(HISTORY_KEY)?
            .unwrap_or_else(|| "[]".to_string()))
    }
}
