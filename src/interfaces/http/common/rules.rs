//! Custom `validator` rules for request DTOs

use rust_decimal::Decimal;
use validator::ValidationError;

/// Money amounts and prices may be zero but never negative.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must be non-negative".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_passes_negative_fails() {
        assert!(non_negative(&Decimal::ZERO).is_ok());
        assert!(non_negative(&Decimal::new(250, 2)).is_ok());
        let err = non_negative(&Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(err.code, "non_negative");
    }
}
