//! Export use case

use crate::application::EntryStore;
use crate::domain::to_plain_text;
use crate::error::Result;
use crate::infrastructure::Substrate;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Export artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    /// Default file name for the artifact
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "journal.txt",
            ExportFormat::Json => "journal.json",
        }
    }

    /// Render the artifact from the current store contents
    pub fn render<S: Substrate>(&self, store: &EntryStore<S>) -> Result<String> {
        match self {
            ExportFormat::Text => Ok(to_plain_text(&store.history()?)),
            ExportFormat::Json => store.raw_history(),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Invalid export format: '{}'. Valid formats are: txt, json",
                s
            )),
        }
    }
}

/// Render `format` and write it to `dest`, returning the number of bytes written
pub fn export_to<S: Substrate>(
    store: &EntryStore<S>,
    format: ExportFormat,
    dest: &Path,
) -> Result<usize> {
    let content = format.render(store)?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(dest, &content)?;

    info!(path = %dest.display(), bytes = content.len(), "exported journal");
    Ok(content.len())
}
