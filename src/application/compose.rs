//! Compose an entry in the user's editor

use crate::application::{EntryStore, SavedEntry};
use crate::domain::Mood;
use crate::error::{JournalError, Result};
use crate::infrastructure::{EditorSession, FileSystemRepository, JournalRepository};
use std::fs;
use tracing::debug;

/// Drafts entries in an external editor and saves them to the journal.
///
/// The draft file survives a rejected save, so running the command again
/// reopens the same text instead of losing it.
pub struct ComposeService {
    repository: FileSystemRepository,
}

impl ComposeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ComposeService { repository }
    }

    /// Open the draft in the editor, then append whatever was written
    pub fn execute(&self, mood: Option<Mood>) -> Result<SavedEntry> {
        let config = self.repository.load_config()?;
        let draft = self.repository.draft_path();

        if !draft.exists() {
            fs::write(&draft, "")?;
        }

        EditorSession::new(config.get_editor()).edit(&draft)?;
        self.save_draft(mood)
    }

    /// Append the current draft contents, removing the draft on success
    pub fn save_draft(&self, mood: Option<Mood>) -> Result<SavedEntry> {
        let draft = self.repository.draft_path();
        let text = match fs::read_to_string(&draft) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(JournalError::Io(e)),
        };

        let mut store = EntryStore::new(self.repository.substrate());
        let saved = store.append(&text, mood)?;

        fs::remove_file(&draft)?;
        debug!(path = %draft.display(), "draft cleared");
        Ok(saved)
    }
}
