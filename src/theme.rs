use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted theme.
pub static STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value of the `data-theme` attribute and of the stored flag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Glyph on the toggle button: the theme a click would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Where the theme preference lives between visits.
pub trait PreferenceStore {
    /// `None` when nothing usable is stored.
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// Explicit holder for the current theme. Every write goes through to the
/// backing store, so the persisted flag and the in-memory value never differ.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    pub fn new(store: S) -> Self {
        let current = store.load().unwrap_or_default();
        Self { store, current }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.save(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Holds the raw flag the way local storage does.
    #[derive(Default)]
    struct MemoryStore(Option<String>);

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.0.as_deref().and_then(|s| s.parse().ok())
        }

        fn save(&mut self, theme: Theme) {
            self.0 = Some(theme.to_string());
        }
    }

    fn store_with(flag: &str) -> MemoryStore {
        MemoryStore(Some(flag.to_string()))
    }

    #[test]
    fn absent_flag_defaults_to_dark() {
        let state = ThemeState::new(MemoryStore::default());
        assert_eq!(state.get(), Theme::Dark);
    }

    #[test]
    fn unrecognized_flag_defaults_to_dark() {
        let state = ThemeState::new(store_with("solarized"));
        assert_eq!(state.get(), Theme::Dark);
        assert!("".parse::<Theme>().is_err());
        assert!("Light".parse::<Theme>().is_err());
    }

    #[test]
    fn stored_light_is_respected() {
        let state = ThemeState::new(store_with("light"));
        assert_eq!(state.get(), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_value() {
        let mut state = ThemeState::new(MemoryStore::default());
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.store().0.as_deref(), Some("light"));
    }

    #[test]
    fn toggling_twice_restores_persisted_value() {
        for start in ["dark", "light"] {
            let mut state = ThemeState::new(store_with(start));
            state.toggle();
            state.toggle();
            assert_eq!(state.store().0.as_deref(), Some(start));
        }
    }

    #[test]
    fn icon_shows_the_other_theme() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn display_matches_parse() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "blue".parse::<Theme>(),
            Err(ThemeParseError("blue".to_string()))
        );
    }
}
