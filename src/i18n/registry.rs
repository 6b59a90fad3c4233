//! Language registry: Single source of truth for all supported languages.
//!
//! Every component that needs the supported-language set (the locale
//! resolver, the navigation listing, the hreflang alternates) must consult
//! this registry rather than keeping its own list. The registry is a
//! singleton initialized once via `OnceLock` and immutable thereafter.

use std::sync::OnceLock;

use serde::Serialize;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// Display name of the language, in its native form (e.g., "Español")
    pub name: &'static str,

    /// ISO 3166-1 alpha-2 country code used for the flag indicator
    pub country_code: &'static str,

    /// Whether this is the default/fallback language (exactly one is true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Holds the ordered list of supported languages. The order is meaningful:
/// consumers that emit one entry per language (navigation menus, hreflang
/// tags) iterate in registry order.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the fallback target for unsupported input
    /// and missing translations. There is exactly one.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are configured, which
    /// indicates a registry definition error.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The canonical set of supported languages.
///
/// English is the default; the rest follow the site's language menu order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            country_code: "US",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Español",
            country_code: "ES",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "Français",
            country_code: "FR",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "中文",
            country_code: "CN",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "日本語",
            country_code: "JP",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "Deutsch",
            country_code: "DE",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "da",
            name: "Dansk",
            country_code: "DK",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "it",
            name: "Italiano",
            country_code: "IT",
            is_default: false,
            enabled: true,
        },
    ]
}
