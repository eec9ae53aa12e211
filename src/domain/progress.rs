//! Word-count driven writing progress

/// Number of words at which progress saturates
pub const WORD_GOAL: usize = 100;

const BAR_WIDTH: usize = 20;

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Completion fraction in `[0, 1]` for a given word count
pub fn progress_fraction(words: usize) -> f64 {
    (words as f64 / WORD_GOAL as f64).min(1.0)
}

/// Snapshot of progress for a piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub words: usize,
    pub fraction: f64,
}

impl Progress {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Progress {
            words,
            fraction: progress_fraction(words),
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }

    /// Render as a fixed-width bar, e.g. `[#####---------------] 25%`
    pub fn bar(&self) -> String {
        let filled = (self.fraction * BAR_WIDTH as f64).round() as usize;
        format!(
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.percent()
        )
    }
}
