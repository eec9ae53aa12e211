//! Domain layer - Business logic and domain models

pub mod entry;
pub mod export;
pub mod mood;
pub mod progress;
pub mod summary;

pub use entry::JournalEntry;
pub use export::{to_plain_text, to_plain_text_in, to_structured};
pub use mood::{detect_mood, Mood};
pub use progress::{progress_fraction, word_count, Progress, WORD_GOAL};
pub use summary::{generate_summary, matched_themes, Theme};
