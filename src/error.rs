use thiserror::Error;

/// Why a raw input was refused before reaching the converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Input is not a number")]
    NotANumber,

    #[error("{0} is not a whole number")]
    NotAnInteger(f64),

    #[error("{0} is below the minimum of {min}", min = crate::validator::MIN_VALUE)]
    BelowMinimum(f64),

    #[error("{0} is above the maximum of {max}", max = crate::validator::MAX_VALUE)]
    AboveMaximum(f64),
}

/// The converter was called outside its supported domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{0} is too large to spell (maximum is {max})", max = crate::converter::MAX_CONVERTIBLE)]
    OutOfRange(u64),

    #[error("Negative numbers cannot be spelled: {0}")]
    Negative(i64),
}

/// Failure of the validate-then-convert pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpellError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::NotANumber.to_string(), "Input is not a number");
        assert_eq!(
            ValidationError::NotAnInteger(3.5).to_string(),
            "3.5 is not a whole number"
        );
        assert_eq!(
            ValidationError::BelowMinimum(1.0).to_string(),
            "1 is below the minimum of 2"
        );
        assert_eq!(
            ValidationError::AboveMaximum(1000001.0).to_string(),
            "1000001 is above the maximum of 1000000"
        );
    }

    #[test]
    fn test_conversion_messages() {
        assert_eq!(
            ConversionError::OutOfRange(1_000_000_000).to_string(),
            "1000000000 is too large to spell (maximum is 999999999)"
        );
        assert!(ConversionError::Negative(-4).to_string().contains("-4"));
    }

    #[test]
    fn test_spell_error_from() {
        let err: SpellError = ValidationError::NotANumber.into();
        assert!(matches!(err, SpellError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid input"));

        let err: SpellError = ConversionError::Negative(-1).into();
        assert!(matches!(err, SpellError::Conversion(_)));
    }
}
