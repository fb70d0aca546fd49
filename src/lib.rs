//! Spell out integers as French or English words.
//!
//! ```
//! use number_words::{convert_to_words, validator, Language};
//!
//! assert!(!validator::validate_str("1234567").is_valid());
//! assert_eq!(
//!     convert_to_words(1_234_567, Language::French).unwrap(),
//!     "un million deux cent trente quatre mille cinq cent soixante sept"
//! );
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod i18n;
pub mod server;
pub mod validator;

pub use converter::{convert_signed, convert_to_words, spell, MAX_CONVERTIBLE};
pub use error::{ConversionError, SpellError, ValidationError};
pub use i18n::Language;
pub use validator::{validate, ValidationOutcome};
