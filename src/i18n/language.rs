//! Language type: the set of languages numbers can be spelled in.
//!
//! Each variant maps to exactly one `Lexicon`, and the converter consults
//! nothing else. A language is passed into every conversion call; no
//! component keeps a "current language" of its own.

use crate::i18n::{LanguageConfig, LanguageRegistry, Lexicon, ENGLISH_LEXICON, FRENCH_LEXICON};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported spelling language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every variant, in registry order.
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// Create a Language from a language code string.
    ///
    /// The code is trimmed and compared case-insensitively.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```
    /// use number_words::i18n::Language;
    /// assert_eq!(Language::from_code("FR").unwrap(), Language::French);
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.trim().to_ascii_lowercase();
        let registry = LanguageRegistry::get();

        match registry.get_by_code(&normalized) {
            Some(config) if config.enabled => Ok(config.language),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The registry's default language.
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_language().language
    }

    /// ISO 639-1 code ("fr", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// The lexical tables used to spell numbers in this language.
    pub fn lexicon(&self) -> &'static Lexicon {
        match self {
            Language::French => &FRENCH_LEXICON,
            Language::English => &ENGLISH_LEXICON,
        }
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the variant has no registry entry, which is a build-time
    /// mistake in `default_languages`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("every Language variant is registered")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}
