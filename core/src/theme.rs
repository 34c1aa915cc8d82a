use std::fmt;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    pub value: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}'", self.value)
    }
}

impl std::error::Error for ParseThemeError {}

/// Stored value wins; otherwise the environment's dark-mode signal decides.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> ThemePreference {
    if let Some(theme) = stored.and_then(|raw| raw.parse::<ThemePreference>().ok()) {
        return theme;
    }
    if prefers_dark {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend is reachable.
    Unavailable,
    /// The backend refused the write, e.g. quota or privacy settings.
    Rejected,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => f.write_str("storage unavailable"),
            StorageError::Rejected => f.write_str("storage rejected the write"),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value storage. Writes are fire-and-forget: an `Err` is reported
/// to the caller for logging only.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, prefers_dark: bool) -> ThemePreference {
        let stored = self.storage.get_item(THEME_STORAGE_KEY);
        resolve_theme(stored.as_deref(), prefers_dark)
    }

    pub fn save(&self, theme: ThemePreference) -> Result<(), StorageError> {
        self.storage.set_item(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LockedStorage;

    impl PreferenceStorage for LockedStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected)
        }
    }

    #[test]
    fn stored_value_beats_environment() {
        assert_eq!(resolve_theme(Some("light"), true), ThemePreference::Light);
        assert_eq!(resolve_theme(Some("dark"), false), ThemePreference::Dark);
    }

    #[test]
    fn missing_or_garbage_value_uses_environment() {
        assert_eq!(resolve_theme(None, true), ThemePreference::Dark);
        assert_eq!(resolve_theme(None, false), ThemePreference::Light);
        assert_eq!(resolve_theme(Some("sepia"), true), ThemePreference::Dark);
    }

    #[test]
    fn save_failure_is_reported_not_stored() {
        let store = PreferenceStore::new(LockedStorage);
        assert_eq!(store.save(ThemePreference::Dark), Err(StorageError::Rejected));
        assert_eq!(store.load(false), ThemePreference::Light);
    }
}
