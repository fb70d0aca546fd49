//! Language registry: single source of truth for supported languages.
//!
//! Uses a `OnceLock` singleton so every caller sees the same immutable list.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Variant this entry describes
    #[serde(skip)]
    pub language: Language,

    /// ISO 639-1 language code (e.g., "fr", "en")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this language is used when a caller names none (only one should be true)
    pub is_default: bool,

    /// Whether this language can be requested
    pub enabled: bool,
}

/// Global language registry singleton.
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

    /// Get a language configuration by its (lowercase) code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several entries are marked default, which indicates a
    /// configuration error in `default_languages`.
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

/// Default language configurations: French (default) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
