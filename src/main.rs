use clap::Parser;
use moodjour::application::{
    export_to, init::init, ComposeService, ConfigService, EntryStore, ExportFormat, Preferences,
};
use moodjour::cli::{
    format_analysis, format_entry_list, format_mood_table, format_saved, Cli, Commands,
};
use moodjour::domain::Mood;
use moodjour::error::JournalError;
use moodjour::infrastructure::{FileSystemRepository, JournalRepository};
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOODJOUR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodjour journal at {}", path.display());
            Ok(())
        }
        Commands::Write { text, mood } => {
            let mood = parse_mood(mood.as_deref())?;
            let repo = FileSystemRepository::discover()?;

            let saved = if text.is_empty() {
                ComposeService::new(repo).execute(mood)?
            } else {
                EntryStore::new(repo.substrate()).append(&text.join(" "), mood)?
            };

            print!("{}", format_saved(&saved));
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut entries = EntryStore::new(repo.substrate()).list()?;

            if let Some(n) = limit {
                entries.truncate(n);
            }

            let output = format_entry_list(&entries, config.preview_length);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        Commands::Export { format, output } => {
            let format = ExportFormat::from_str(&format).map_err(JournalError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::new(repo.substrate());

            match output {
                Some(path) if path.as_os_str() == "-" => {
                    print!("{}", format.render(&store)?);
                }
                other => {
                    let dest = other.unwrap_or_else(|| PathBuf::from(format.file_name()));
                    export_to(&store, format, &dest)?;
                    println!("Exported journal to {}", dest.display());
                }
            }
            Ok(())
        }
        Commands::Analyze { text } => {
            let text = if text.is_empty() {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.join(" ")
            };
            print!("{}", format_analysis(&text));
            Ok(())
        }
        Commands::Moods => {
            print!("{}", format_mood_table());
            Ok(())
        }
        Commands::Theme { setting } => {
            let repo = FileSystemRepository::discover()?;
            let mut prefs = Preferences::new(repo.substrate());

            let dark = match setting.as_deref() {
                None => prefs.dark_mode()?,
                Some("dark") => {
                    prefs.set_dark_mode(true)?;
                    true
                }
                Some("light") => {
                    prefs.set_dark_mode(false)?;
                    false
                }
                Some("toggle") => prefs.toggle_dark_mode()?,
                Some(other) => {
                    return Err(JournalError::Config(format!(
                        "Invalid theme: '{}'. Valid settings are: dark, light, toggle",
                        other
                    )))
                }
            };

            println!("Theme: {}", if dark { "dark" } else { "light" });
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("preview_length = {}", config.preview_length);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: editor, preview_length");
                Ok(())
            }
        }
    }
}

fn parse_mood(value: Option<&str>) -> Result<Option<Mood>, JournalError> {
    value
        .map(|v| Mood::from_str(v).map_err(JournalError::UnknownMood))
        .transpose()
}
