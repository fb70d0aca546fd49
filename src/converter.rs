//! Number-to-words conversion.
//!
//! An integer is decomposed from the largest group down (millions, thousands,
//! hundreds, then the 0-99 remainder). Each group's multiplier is spelled
//! recursively, followed by the language's magnitude word. Every call builds
//! its own word list, so conversions never observe each other.

use crate::error::{ConversionError, SpellError};
use crate::i18n::{Language, Lexicon};
use crate::validator;
use serde_json::Value;
use tracing::debug;

/// Largest value the group decomposition can spell.
pub const MAX_CONVERTIBLE: u64 = 999_999_999;

const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

/// Spell `number` in `language`.
///
/// Groups are separated by single spaces, with no leading or trailing space.
/// Zero always yields `"zero"`.
///
/// # Errors
/// `ConversionError::OutOfRange` when `number` exceeds [`MAX_CONVERTIBLE`].
///
/// # Example
/// ```
/// use number_words::{convert_to_words, Language};
///
/// assert_eq!(convert_to_words(91, Language::French).unwrap(), "quatre vingt onze");
/// assert_eq!(convert_to_words(1000, Language::English).unwrap(), "one thousand");
/// ```
pub fn convert_to_words(number: u64, language: Language) -> Result<String, ConversionError> {
    if number > MAX_CONVERTIBLE {
        return Err(ConversionError::OutOfRange(number));
    }

    let lexicon = language.lexicon();
    if number == 0 {
        return Ok(lexicon.zero.to_string());
    }

    let mut words = Vec::new();
    push_groups(number, lexicon, &mut words);
    let phrase = words.join(" ");

    debug!(number, language = %language, phrase = %phrase, "Converted number");
    Ok(phrase)
}

/// Spell a signed value, rejecting negatives.
pub fn convert_signed(number: i64, language: Language) -> Result<String, ConversionError> {
    let unsigned = u64::try_from(number).map_err(|_| ConversionError::Negative(number))?;
    convert_to_words(unsigned, language)
}

/// Validate a raw value, then spell it.
///
/// This is the whole boundary pipeline: nothing reaches the converter without
/// passing [`validator::check`] first.
pub fn spell(raw: &Value, language: Language) -> Result<String, SpellError> {
    let number = validator::check(raw)?;
    Ok(convert_to_words(u64::from(number), language)?)
}

/// Append the words for `number` (1..=MAX_CONVERTIBLE) to `words`.
fn push_groups(mut number: u64, lexicon: &Lexicon, words: &mut Vec<&'static str>) {
    let millions = number / MILLION;
    if millions > 0 {
        push_groups(millions, lexicon, words);
        words.push(lexicon.million);
        number %= MILLION;
    }

    let thousands = number / THOUSAND;
    if thousands > 0 {
        push_multiplier(thousands, lexicon.elide_one_thousand, lexicon, words);
        words.push(lexicon.thousand);
        number %= THOUSAND;
    }

    let hundreds = number / HUNDRED;
    if hundreds > 0 {
        push_multiplier(hundreds, lexicon.elide_one_hundred, lexicon, words);
        words.push(lexicon.hundred);
        number %= HUNDRED;
    }

    push_below_hundred(number, lexicon, words);
}

fn push_multiplier(
    multiplier: u64,
    elide_one: bool,
    lexicon: &Lexicon,
    words: &mut Vec<&'static str>,
) {
    if multiplier == 1 && elide_one {
        return;
    }
    push_groups(multiplier, lexicon, words);
}

/// A zero remainder adds nothing: callers only get here with a non-zero total.
fn push_below_hundred(number: u64, lexicon: &Lexicon, words: &mut Vec<&'static str>) {
    match number {
        0 => {}
        1..=19 => words.extend(lexicon.unit(number)),
        _ => {
            words.extend(lexicon.tens(number / 10));
            let units = number % 10;
            if units > 0 {
                words.extend(lexicon.unit(units));
            }
        }
    }
}
