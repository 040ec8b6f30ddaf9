//! Money amount checks shared by the priced aggregates

use rust_decimal::Decimal;

use super::{DomainError, DomainResult};

/// Rejects negative prices and amounts.
pub fn ensure_non_negative(field: &str, value: Decimal) -> DomainResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::Validation(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn accepts_zero_and_positive() {
        assert!(ensure_non_negative("amount", Decimal::ZERO).is_ok());
        assert!(ensure_non_negative("amount", Decimal::new(250, 2)).is_ok());
    }

    #[test]
    fn rejects_negative() {
        let err = ensure_non_negative("pricePerHour", Decimal::new(-1, 0)).unwrap_err();
        assert!(err.to_string().contains("pricePerHour"));
    }
}
