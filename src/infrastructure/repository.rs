//! File system repository

use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, FileSubstrate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodjour directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodjour directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJOUR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "MOODJOUR_ROOT is set to '{}' but no .moodjour directory found. \
                    Run 'moodjour init' in that directory or unset MOODJOUR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(JournalError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(".moodjour").is_dir()
    }

    /// Key-value store holding the journal history and preferences
    pub fn substrate(&self) -> FileSubstrate {
        FileSubstrate::new(self.root.join(".moodjour").join("store"))
    }

    /// Scratch file used when composing an entry in the editor
    pub fn draft_path(&self) -> PathBuf {
        self.root.join(".moodjour").join("draft.txt")
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(".moodjour");

        if journal_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        fs::create_dir(journal_dir.join("store"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".moodjour/store").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(matches!(repo.initialize(), Err(JournalError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        FileSystemRepository::new(temp.path().to_path_buf())
            .initialize()
            .unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()) {
            Err(JournalError::NotJournalDirectory(path)) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotJournalDirectory, got {:?}", other),
        }
    }
}
