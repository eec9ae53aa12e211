//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_analysis, format_entry_list, format_mood_table, format_saved};
