//! Internationalization (i18n) module: the languages numbers can be spelled in.
//!
//! # Architecture
//!
//! - `lexicon`: Per-language unit/tens tables and connector words
//! - `language`: The `Language` variant type and its code mapping
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `metrics`: Conversion counters for the service layer
//!
//! # Example
//!
//! ```
//! use number_words::i18n::{Language, LanguageRegistry};
//!
//! let french = Language::from_code("fr").unwrap();
//! assert_eq!(french.lexicon().hundred, "cent");
//!
//! let languages = LanguageRegistry::get().list_enabled();
//! assert_eq!(languages.len(), 2);
//! ```

mod language;
mod lexicon;
mod metrics;
mod registry;

pub use language::Language;
pub use lexicon::{Lexicon, ENGLISH_LEXICON, FRENCH_LEXICON};
pub use metrics::{ConversionMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
