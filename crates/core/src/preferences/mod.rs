//! Persisted user preferences.
//!
//! The theme used to live in browser-local storage; it is now explicit
//! application state, read once at startup and written on change.

mod sqlite;

pub use sqlite::SqlitePreferenceStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Result<Self, PreferencesError> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferencesError::UnknownTheme(other.to_string())),
        }
    }
}

/// Trait for preference storage.
pub trait PreferenceStore: Send + Sync {
    /// Get a preference value by key.
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError>;

    /// Set a preference value, overwriting any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError>;
}

/// Read the persisted theme, defaulting when unset or unreadable.
pub fn load_theme(store: &dyn PreferenceStore) -> Result<Theme, PreferencesError> {
    match store.get(THEME_KEY)? {
        Some(value) => Theme::parse(&value),
        None => Ok(Theme::default()),
    }
}

/// Persist a theme change.
pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> Result<(), PreferencesError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_roundtrip() {
        assert_eq!(Theme::parse("light").unwrap(), Theme::Light);
        assert_eq!(Theme::parse("dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Light.as_str()).unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_parse_rejects_unknown() {
        let result = Theme::parse("sepia");
        assert!(matches!(result, Err(PreferencesError::UnknownTheme(_))));
    }

    #[test]
    fn test_load_theme_defaults_when_unset() {
        let store = SqlitePreferenceStore::in_memory().unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_save_then_load_theme() {
        let store = SqlitePreferenceStore::in_memory().unwrap();
        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);

        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }
}
