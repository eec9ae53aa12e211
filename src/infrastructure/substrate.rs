//! Key-value persistence substrate
//!
//! The journal core only needs an opaque string-keyed store with whole-value
//! reads and writes. Two implementations are provided: an in-memory map and a
//! directory holding one file per key.

use crate::error::{JournalError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Opaque string-keyed store. Writes replace the whole value.
pub trait Substrate {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process substrate backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemorySubstrate {
    values: BTreeMap<String, String>,
}

impl MemorySubstrate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate a previously written store
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Substrate for MemorySubstrate {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Substrate storing each key as a file inside a directory
#[derive(Debug, Clone)]
pub struct FileSubstrate {
    dir: PathBuf,
}

impl FileSubstrate {
    pub fn new(dir: PathBuf) -> Self {
        FileSubstrate { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key.contains("..")
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(JournalError::Config(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl Substrate for FileSubstrate {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!("{}.moodjour-tmp-{}", key, std::process::id()));

        if let Err(e) = replace_file(&tmp_path, &path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JournalError::Io(e));
        }

        debug!(key, bytes = value.len(), "wrote store value");
        Ok(())
    }
}

fn replace_file(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(tmp_path, value)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(tmp_path, path)
}
