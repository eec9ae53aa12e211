//! Thematic summaries of entry text

use std::fmt;

/// Reflective categories used to summarize an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Gratitude,
    Growth,
    Connection,
    Emotion,
    Reflection,
}

const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (Theme::Gratitude, &["grateful", "thankful", "appreciate"]),
    (
        Theme::Growth,
        &["learned", "improved", "progress", "challenge"],
    ),
    (Theme::Connection, &["friend", "family", "talked", "shared"]),
    (
        Theme::Emotion,
        &["sad", "happy", "angry", "excited", "lonely"],
    ),
    (
        Theme::Reflection,
        &["thought", "realized", "understood", "noticed"],
    ),
];

const FALLBACK_SUMMARY: &str = "You reflected on your day.";

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Gratitude => "gratitude",
            Theme::Growth => "growth",
            Theme::Connection => "connection",
            Theme::Emotion => "emotion",
            Theme::Reflection => "reflection",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Themes whose keywords occur in `text`, in table order
pub fn matched_themes(text: &str) -> Vec<Theme> {
    let lower = text.to_lowercase();

    THEME_KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(theme, _)| *theme)
        .collect()
}

/// One-sentence summary naming at most the first two matched themes
pub fn generate_summary(text: &str) -> String {
    match matched_themes(text).as_slice() {
        [] => FALLBACK_SUMMARY.to_string(),
        [only] => format!("You reflected on {}.", only),
        [first, second, ..] => format!("You reflected on {} and {}.", first, second),
    }
}
