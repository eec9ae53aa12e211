//! Display preferences kept alongside the history

use crate::error::Result;
use crate::infrastructure::Substrate;
use tracing::debug;

/// Substrate key holding the dark-mode flag as "true"/"false"
pub const DARK_MODE_KEY: &str = "dark-mode";

pub struct Preferences<S: Substrate> {
    substrate: S,
}

impl<S: Substrate> Preferences<S> {
    pub fn new(substrate: S) -> Self {
        Preferences { substrate }
    }

    /// Dark mode is on only when the stored flag is exactly "true"
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.substrate.get(DARK_MODE_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        debug!(enabled, "setting dark mode");
        self.substrate.set(DARK_MODE_KEY, &enabled.to_string())
    }

    /// Flip the flag and return the new value
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let enabled = !self.dark_mode()?;
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemorySubstrate;

    #[test]
    fn test_default_is_light() {
        let prefs = Preferences::new(MemorySubstrate::new());
        assert!(!prefs.dark_mode().unwrap());
    }

    #[test]
    fn test_toggle() {
        let mut prefs = Preferences::new(MemorySubstrate::new());
        assert!(prefs.toggle_dark_mode().unwrap());
        assert!(prefs.dark_mode().unwrap());
        assert!(!prefs.toggle_dark_mode().unwrap());
    }

    #[test]
    fn test_only_exact_true_enables() {
        for value in ["TRUE", "1", "yes", ""] {
            let prefs = Preferences::new(MemorySubstrate::new().with(DARK_MODE_KEY, value));
            assert!(!prefs.dark_mode().unwrap(), "{:?} enabled dark mode", value);
        }
    }
}
