//! Error types for moodjour

use crate::domain::Mood;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a moodjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Please write something.")]
    EmptyEntry,

    #[error("Couldn't detect mood — please select one.")]
    UndetectableMood,

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::EmptyEntry => 3,
            JournalError::UndetectableMood | JournalError::UnknownMood(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::UndetectableMood => {
                format!(
                    "{}\n\n\
                    Pick a mood explicitly with --mood, one of: {}\n\
                    Example: moodjour write --mood calm \"A slow morning\"",
                    self,
                    mood_names()
                )
            }
            JournalError::UnknownMood(value) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods: {}",
                    value,
                    mood_names()
                )
            }
            JournalError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodjour config editor 'vim'\n\
                    • Or pass the entry directly: moodjour write \"...\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

fn mood_names() -> String {
    Mood::ALL
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
