//! Persisted language preference store.
//!
//! The client's chosen language survives sessions through a small JSON
//! key-value file under a fixed namespace key. The store is an explicit,
//! injected value (no ambient global): construct it once at session start,
//! pass it where it is needed. Its lifecycle matches the site behavior:
//! initialized from persisted storage, updated only on an explicit user
//! selection, never auto-reverting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::i18n::Language;

/// Namespace key the preference is persisted under.
pub const STORAGE_KEY: &str = "spacex-language-storage";

/// Failures while reading or writing the preference file.
///
/// These never surface to the user: a failed read falls back to the default
/// language, a failed write keeps the in-memory selection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse preference file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("preference file holds unsupported language '{0}'")]
    Unsupported(String),
}

/// On-disk shape: `{"spacex-language-storage": "en"}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    #[serde(rename = "spacex-language-storage")]
    language: String,
}

/// The client's persisted language preference.
#[derive(Debug)]
pub struct LanguageStore {
    path: PathBuf,
    current: Language,
}

impl LanguageStore {
    /// Load the store, falling back to the default language when the file
    /// is missing, unreadable, or holds an unsupported code.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match read_preference(&path) {
            Ok(language) => language,
            Err(StoreError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Language::default_language()
            }
            Err(err) => {
                warn!("Ignoring stored language preference: {}", err);
                Language::default_language()
            }
        };

        Self { path, current }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        self.current
    }

    /// Record an explicit language selection.
    ///
    /// Unsupported codes are ignored (the selection stands as it was), the
    /// way the language menu ignores unknown entries. A persisted-write
    /// failure keeps the in-memory selection and reports the error.
    pub fn select(&mut self, code: &str) -> Result<(), StoreError> {
        let Ok(language) = Language::from_code(code) else {
            warn!("Ignoring selection of unsupported language '{}'", code);
            return Ok(());
        };

        self.current = language;
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let stored = StoredPreference {
            language: self.current.code().to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}

/// Read and validate the persisted language code.
fn read_preference(path: &Path) -> Result<Language, StoreError> {
    let contents = fs::read_to_string(path)?;
    let stored: StoredPreference = serde_json::from_str(&contents)?;

    Language::from_code(&stored.language)
        .map_err(|_| StoreError::Unsupported(stored.language.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("preferences.json")
    }

    #[test]
    fn test_missing_file_defaults_to_english() {
        let dir = TempDir::new().unwrap();
        let store = LanguageStore::load(store_path(&dir));
        assert_eq!(store.current().code(), "en");
    }

    #[test]
    fn test_select_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = LanguageStore::load(&path);
        store.select("ja").unwrap();
        assert_eq!(store.current().code(), "ja");

        // A fresh session reads the persisted selection back
        let reloaded = LanguageStore::load(&path);
        assert_eq!(reloaded.current().code(), "ja");
    }

    #[test]
    fn test_select_unsupported_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut store = LanguageStore::load(store_path(&dir));

        store.select("de").unwrap();
        store.select("ru").unwrap();

        // Selection stands; no auto-revert
        assert_eq!(store.current().code(), "de");
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "not json at all").unwrap();

        let store = LanguageStore::load(&path);
        assert_eq!(store.current().code(), "en");
    }

    #[test]
    fn test_unsupported_stored_code_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        fs::write(&path, r#"{"spacex-language-storage": "ru"}"#).unwrap();

        let store = LanguageStore::load(&path);
        assert_eq!(store.current().code(), "en");
    }

    #[test]
    fn test_file_uses_namespace_key() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = LanguageStore::load(&path);
        store.select("fr").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value[STORAGE_KEY], "fr");
    }
}
