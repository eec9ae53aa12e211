//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save a journal entry (opens the editor when no text is given)
    Write {
        /// Entry text
        text: Vec<String>,

        /// Mood (happy, sad, angry, calm, confused); detected from the text if omitted
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Show past entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export the whole journal
    Export {
        /// Export format (txt, json)
        format: String,

        /// Output file, or '-' for stdout (default: journal.txt / journal.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Word count, progress, detected mood and summary for some text (reads stdin if empty)
    Analyze {
        /// Text to analyze
        text: Vec<String>,
    },

    /// List the mood vocabulary
    Moods,

    /// Show or change the dark-mode preference (dark, light, toggle)
    Theme {
        setting: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
