//! Mood vocabulary and keyword-based mood detection

use std::fmt;
use std::str::FromStr;

/// Mood-ring colour used for labels outside the vocabulary
pub const FALLBACK_COLOR: &str = "#d94f70";

/// The closed set of moods an entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Confused,
}

/// Trigger keywords per mood. Order matters: the first matching mood wins.
const MOOD_KEYWORDS: &[(Mood, &[&str])] = &[
    (
        Mood::Happy,
        &["happy", "excited", "love", "great", "fun", "joy", "awesome"],
    ),
    (
        Mood::Sad,
        &["sad", "tired", "lonely", "hurt", "cry", "down", "lost"],
    ),
    (
        Mood::Angry,
        &["mad", "angry", "annoyed", "frustrated", "hate", "unfair"],
    ),
    (
        Mood::Calm,
        &["relaxed", "peaceful", "okay", "fine", "chill", "content"],
    ),
    (
        Mood::Confused,
        &["confused", "unsure", "weird", "strange", "mixed", "stuck"],
    ),
];

impl Mood {
    /// All moods in declaration order
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Confused,
    ];

    /// The label written to storage
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Confused => "😕",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Confused => "confused",
        }
    }

    /// Mood-ring colour as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "#f4a261",
            Mood::Sad => "#457b9d",
            Mood::Angry => "#e63946",
            Mood::Calm => "#2a9d8f",
            Mood::Confused => "#6c757d",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        MOOD_KEYWORDS
            .iter()
            .find(|(mood, _)| mood == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }

    /// Resolve a stored label back to a mood, if it belongs to the vocabulary
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Colour for an arbitrary stored label
    pub fn color_for_label(label: &str) -> &'static str {
        Mood::from_label(label)
            .map(|m| m.color())
            .unwrap_or(FALLBACK_COLOR)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Accepts a mood name (case-insensitive) or its emoji label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mood) = Mood::from_label(trimmed) {
            return Ok(mood);
        }

        let lower = trimmed.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| trimmed.to_string())
    }
}

/// Infer a mood from free text.
///
/// Case-insensitive substring match against each mood's keywords, in
/// declaration order. Returns `None` when no keyword occurs.
pub fn detect_mood(text: &str) -> Option<Mood> {
    let lower = text.to_lowercase();

    MOOD_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(mood, _)| *mood)
}
