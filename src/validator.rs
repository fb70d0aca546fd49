//! Input validation: decides which raw values may be spelled.
//!
//! A raw value is accepted when it is numerically a whole number in
//! `MIN_VALUE..=MAX_VALUE`. Text is coerced to a number the way a browser
//! form field would be (surrounding whitespace ignored, `1e3` accepted).

use crate::error::ValidationError;
use serde_json::Value;

/// Smallest accepted value (inclusive).
pub const MIN_VALUE: u32 = 2;

/// Largest accepted value (inclusive).
pub const MAX_VALUE: u32 = 1_000_000;

/// Result of the gating predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

impl<T, E> From<&Result<T, E>> for ValidationOutcome {
    fn from(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid
        }
    }
}

/// Check a raw value of any JSON type.
pub fn validate(raw: &Value) -> ValidationOutcome {
    ValidationOutcome::from(&check(raw))
}

/// Check a text input (e.g. a form field).
pub fn validate_str(raw: &str) -> ValidationOutcome {
    ValidationOutcome::from(&check_str(raw))
}

/// Validate a raw value and return it as an integer.
///
/// Numbers are taken as-is, strings are parsed, every other JSON type is
/// not a number.
pub fn check(raw: &Value) -> Result<u32, ValidationError> {
    match raw {
        Value::Number(n) => n
            .as_f64()
            .ok_or(ValidationError::NotANumber)
            .and_then(check_number),
        Value::String(s) => check_str(s),
        _ => Err(ValidationError::NotANumber),
    }
}

/// Validate a text input and return it as an integer.
pub fn check_str(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NotANumber);
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber)?;
    check_number(value)
}

/// Validate an already numeric value.
pub fn check_number(value: f64) -> Result<u32, ValidationError> {
    // f64 parsing accepts "inf" and "NaN"
    if !value.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger(value));
    }
    if value < f64::from(MIN_VALUE) {
        return Err(ValidationError::BelowMinimum(value));
    }
    if value > f64::from(MAX_VALUE) {
        return Err(ValidationError::AboveMaximum(value));
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Boundary Tests ====================

    #[test]
    fn test_minimum_is_inclusive() {
        assert_eq!(validate(&json!(2)), ValidationOutcome::Valid);
        assert_eq!(check(&json!(2)), Ok(2));
    }

    #[test]
    fn test_one_is_rejected() {
        assert_eq!(validate(&json!(1)), ValidationOutcome::Invalid);
        assert_eq!(check(&json!(1)), Err(ValidationError::BelowMinimum(1.0)));
    }

    #[test]
    fn test_maximum_is_inclusive() {
        assert_eq!(validate(&json!(1_000_000)), ValidationOutcome::Valid);
        assert_eq!(check(&json!(1_000_000)), Ok(1_000_000));
    }

    #[test]
    fn test_above_maximum() {
        assert_eq!(validate(&json!(1_000_001)), ValidationOutcome::Invalid);
        assert_eq!(
            check(&json!(1_000_001)),
            Err(ValidationError::AboveMaximum(1_000_001.0))
        );
    }

    #[test]
    fn test_zero_and_negative() {
        assert!(!validate(&json!(0)).is_valid());
        assert!(!validate(&json!(-5)).is_valid());
    }

    // ==================== Fractional Input Tests ====================

    #[test]
    fn test_fraction_rejected() {
        assert_eq!(check(&json!(3.5)), Err(ValidationError::NotAnInteger(3.5)));
        assert_eq!(validate(&json!(1_000_000.5)), ValidationOutcome::Invalid);
    }

    #[test]
    fn test_whole_float_accepted() {
        assert_eq!(check(&json!(42.0)), Ok(42));
    }

    // ==================== Non-numeric Input Tests ====================

    #[test]
    fn test_non_numeric_json_types() {
        for raw in [json!(null), json!(true), json!([3]), json!({"v": 3})] {
            assert_eq!(check(&raw), Err(ValidationError::NotANumber), "{raw}");
        }
    }

    #[test]
    fn test_numeric_string_in_json() {
        assert_eq!(check(&json!("17")), Ok(17));
        assert_eq!(check(&json!("abc")), Err(ValidationError::NotANumber));
    }

    // ==================== Text Input Tests ====================

    #[test]
    fn test_str_trims_whitespace() {
        assert_eq!(check_str("  250 "), Ok(250));
    }

    #[test]
    fn test_str_empty_is_not_a_number() {
        assert_eq!(check_str(""), Err(ValidationError::NotANumber));
        assert_eq!(check_str("   "), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_str_scientific_notation() {
        assert_eq!(check_str("1e3"), Ok(1000));
        assert_eq!(check_str("1e7"), Err(ValidationError::AboveMaximum(1e7)));
    }

    #[test]
    fn test_str_non_finite() {
        assert_eq!(check_str("inf"), Err(ValidationError::NotANumber));
        assert_eq!(check_str("NaN"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_str_garbage() {
        assert_eq!(validate_str("12abc"), ValidationOutcome::Invalid);
        assert_eq!(validate_str("1 000"), ValidationOutcome::Invalid);
        assert_eq!(validate_str("12"), ValidationOutcome::Valid);
    }

    // ==================== Outcome Tests ====================

    #[test]
    fn test_outcome_from_result() {
        let ok: Result<u32, ()> = Ok(3);
        let err: Result<u32, ()> = Err(());
        assert!(ValidationOutcome::from(&ok).is_valid());
        assert!(!ValidationOutcome::from(&err).is_valid());
    }
}
