//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a thin validated wrapper over
//! a registry code. It can only be constructed for supported, enabled
//! languages, so downstream code never has to re-check codes.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::Serialize;

/// A validated language.
///
/// Represents a language that has been validated against the registry.
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// Constant for English, the default language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default language.
    ///
    /// This is the language used when resolution finds no supported match,
    /// and the fallback source for missing translation entries.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Pick the best supported language from an `Accept-Language` header.
    ///
    /// Entries are taken in header order: split on commas, quality weights
    /// (`;q=...`) stripped, lowercased, reduced to the primary subtag
    /// (`en-US` -> `en`). The first entry that names a supported, enabled
    /// language wins. Malformed entries are skipped, never an error. An
    /// absent header or no match yields the default language.
    pub fn detect_best(accept_language: Option<&str>) -> Language {
        let Some(header) = accept_language else {
            return Language::default_language();
        };

        header
            .split(',')
            .map(|entry| {
                let tag = entry.split(';').next().unwrap_or("").trim().to_lowercase();
                // Primary subtag only: "zh-CN" matches "zh"
                tag.split('-').next().unwrap_or("").to_string()
            })
            .find_map(|primary| Language::from_code(&primary).ok())
            .unwrap_or_else(Language::default_language)
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This never
    /// happens for a `Language` constructed via `from_code` or the constant.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native display name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the country code used for the flag indicator.
    pub fn country_code(&self) -> &'static str {
        self.config().country_code
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        for code in ["en", "es", "fr", "zh", "ja", "de", "da", "it"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("ru");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        // Codes are stored lowercase; callers normalize before lookup
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== default_language Tests ====================

    #[test]
    fn test_default_language_is_english() {
        let default = Language::default_language();
        assert_eq!(default.code(), "en");
        assert!(default.is_default());
    }

    // ==================== detect_best Tests ====================

    #[test]
    fn test_detect_best_absent_header() {
        assert_eq!(Language::detect_best(None), Language::ENGLISH);
    }

    #[test]
    fn test_detect_best_empty_header() {
        assert_eq!(Language::detect_best(Some("")), Language::ENGLISH);
    }

    #[test]
    fn test_detect_best_simple() {
        let lang = Language::detect_best(Some("es"));
        assert_eq!(lang.code(), "es");
    }

    #[test]
    fn test_detect_best_region_subtag() {
        let lang = Language::detect_best(Some("en-US,en;q=0.9"));
        assert_eq!(lang.code(), "en");
    }

    #[test]
    fn test_detect_best_header_order_wins() {
        // zh appears first, so zh wins even though en is also supported
        let lang = Language::detect_best(Some("zh-CN,zh;q=0.9,en;q=0.8"));
        assert_eq!(lang.code(), "zh");
    }

    #[test]
    fn test_detect_best_skips_unsupported() {
        let lang = Language::detect_best(Some("ru-RU,ru;q=0.9,fr;q=0.8"));
        assert_eq!(lang.code(), "fr");
    }

    #[test]
    fn test_detect_best_no_match_falls_back() {
        let lang = Language::detect_best(Some("ru,ko;q=0.8"));
        assert_eq!(lang.code(), "en");
    }

    #[test]
    fn test_detect_best_uppercase_normalized() {
        let lang = Language::detect_best(Some("FR-ca"));
        assert_eq!(lang.code(), "fr");
    }

    #[test]
    fn test_detect_best_malformed_entries_skipped() {
        // Missing weights, stray separators and whitespace must not panic
        let lang = Language::detect_best(Some(" ;q=, , de ;; , es"));
        assert_eq!(lang.code(), "de");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::from_code("ja").unwrap();
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_config_access() {
        let lang = Language::from_code("da").unwrap();
        let config = lang.config();
        assert_eq!(config.code, "da");
        assert_eq!(config.name, "Dansk");
        assert_eq!(config.country_code, "DK");
    }

    #[test]
    fn test_serialize_as_plain_code() {
        let json = serde_json::to_string(&Language::ENGLISH).unwrap();
        assert_eq!(json, "\"en\"");
    }
}
