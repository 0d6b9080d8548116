//! Theme preference and effective light/dark resolution.
//!
//! DESIGN
//! ======
//! The explicit preference and the detected system theme are kept separate so
//! "system" keeps following the environment. The system theme is `None` until
//! it has been read from a live display environment.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// User's explicit theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Parse the persisted preference value (`light`, `dark`, `system`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// Theme reported by the display environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemTheme {
    Light,
    Dark,
}

/// Resolved rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

/// Theme inputs as seen by components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub system: Option<SystemTheme>,
}

impl ThemeState {
    /// Dark for an explicit dark preference, or for "system" when the
    /// environment reports dark. Light otherwise, including an unknown
    /// system theme.
    #[must_use]
    pub fn effective(&self) -> EffectiveTheme {
        match (self.preference, self.system) {
            (ThemePreference::Dark, _) | (ThemePreference::System, Some(SystemTheme::Dark)) => EffectiveTheme::Dark,
            _ => EffectiveTheme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.effective() == EffectiveTheme::Dark
    }
}
