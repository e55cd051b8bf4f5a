//! # Validation Module
//!
//! Field-level parsers for the free-text draft fields.
//!
//! Draft rows hold whatever the user typed; nothing is checked while
//! editing. These functions run only at commit time, one field at a
//! time, in the committer's fixed order (name, quantity, price).
//!
//! ## Usage
//! ```rust
//! use salebook_core::validation::{parse_product_name, parse_quantity, parse_price};
//!
//! assert_eq!(parse_product_name("  Pen ").unwrap(), "Pen");
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert_eq!(parse_price("10.00").unwrap().kobo(), 1000);
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must be non-empty after trimming.
///
/// ## Returns
/// The trimmed name.
pub fn parse_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product name",
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity field.
///
/// ## Rules
/// - Must parse as a whole number (quantities are whole units;
///   fractional input is rejected, not rounded).
/// - Must be positive (> 0).
pub fn parse_quantity(quantity: &str) -> ValidationResult<i64> {
    let quantity = quantity.trim();

    let qty: i64 = quantity
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: "quantity" })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(qty)
}

/// Validates a sell price field.
///
/// ## Rules
/// - Must parse as an amount (optional `₦`, at most two decimals).
/// - Must be positive (> 0); zero-price sales are not recordable.
pub fn parse_price(price: &str) -> ValidationResult<Money> {
    let amount: Money = price
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: "sell price" })?;

    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "sell price",
        });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_name() {
        assert_eq!(parse_product_name("Pen").unwrap(), "Pen");
        assert_eq!(parse_product_name("  Blue Pen  ").unwrap(), "Blue Pen");

        assert!(parse_product_name("").is_err());
        assert!(parse_product_name("   ").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-3").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("three").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("10.00").unwrap().kobo(), 1000);
        assert_eq!(parse_price("₦5").unwrap().kobo(), 500);

        assert!(parse_price("").is_err());
        assert!(parse_price("0").is_err());
        assert!(parse_price("0.00").is_err());
        assert!(parse_price("free").is_err());
        assert!(parse_price("1.005").is_err());
    }
}
