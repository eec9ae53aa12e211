//! Application layer - Use cases and orchestration

pub mod compose;
pub mod entry_store;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod preferences;

pub use compose::ComposeService;
pub use entry_store::{EntryStore, SavedEntry, HISTORY_KEY};
pub use export::{export_to, ExportFormat};
pub use manage_config::ConfigService;
pub use preferences::{Preferences, DARK_MODE_KEY};
