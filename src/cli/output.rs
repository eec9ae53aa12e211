//! Output formatting utilities

use crate::application::SavedEntry;
use crate::domain::export::format_timestamp;
use crate::domain::{detect_mood, generate_summary, JournalEntry, Mood, Progress};
use chrono::Local;

/// Format entries for display, one line each
pub fn format_entry_list(entries: &[JournalEntry], preview_length: usize) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} — Mood: {} — {}...\n",
            format_timestamp(&entry.time, &Local),
            entry.mood,
            entry.preview(preview_length)
        ));
    }
    output
}

/// Confirmation shown after a successful save
pub fn format_saved(saved: &SavedEntry) -> String {
    let mood = match saved.entry.known_mood() {
        Some(mood) => format!("{} {}", mood.label(), mood.name()),
        None => saved.entry.mood.clone(),
    };
    format!("Entry saved!\nMood: {}\n{}\n", mood, saved.summary)
}

/// Live feedback for a piece of text
pub fn format_analysis(text: &str) -> String {
    let progress = Progress::of(text);
    let mood = match detect_mood(text) {
        Some(mood) => format!("{} {} ({})", mood.label(), mood.name(), mood.color()),
        None => "not detected".to_string(),
    };

    format!(
        "Words: {}\nProgress: {}\nMood: {}\nSummary: {}\n",
        progress.words,
        progress.bar(),
        mood,
        generate_summary(text)
    )
}

/// The mood vocabulary with colours and trigger keywords
pub fn format_mood_table() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{}  {:<9} {}  {}\n",
            mood.label(),
            mood.name(),
            mood.color(),
            mood.keywords().join(", ")
        ));
    }
    output
}
