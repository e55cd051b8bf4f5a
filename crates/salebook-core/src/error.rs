//! # Error Types
//!
//! Domain-specific error types for salebook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ValidationError   - one field of one row failed to parse
//!       │
//!       ▼
//! CommitError       - the single message a failed batch commit surfaces
//! ```
//!
//! Field validators report *which rule* broke; the committer wraps that
//! into *which row's product* broke it, because that is the message the
//! user sees. Each `CommitError` variant maps to exactly one user-facing
//! string, and a failed commit surfaces exactly one of them.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// These occur while parsing a single free-text field of a draft row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank after trimming.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field does not parse as a number of the expected shape.
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    /// Numeric field parsed but is zero or negative.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Commit Error
// =============================================================================

/// The single error a failed batch commit produces.
///
/// Commits are all-or-nothing: the first row (in draft order) that
/// fails validation aborts the whole batch with one of these, and no
/// partial batch is ever recorded. Messages name the offending product,
/// or "an item" when the name itself is the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// A row has content but no product name.
    #[error("Enter a product name for an item")]
    NameRequired,

    /// A row's quantity is missing, not a whole number, or not positive.
    #[error("Enter a valid quantity for {product}")]
    InvalidQuantity { product: String },

    /// A row's sell price is missing, unparseable, or not positive.
    #[error("Enter a valid sell price for {product}")]
    InvalidPrice { product: String },

    /// Every row was blank; there is nothing to turn into records.
    #[error("There is nothing to record")]
    NothingToRecord,
}

/// Convenience alias for results carrying a `CommitError`.
pub type CommitResult<T> = Result<T, CommitError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product name",
        };
        assert_eq!(err.to_string(), "product name is required");

        let err = ValidationError::NotANumber { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be a number");
    }

    #[test]
    fn test_commit_error_messages() {
        assert_eq!(
            CommitError::NameRequired.to_string(),
            "Enter a product name for an item"
        );
        assert_eq!(
            CommitError::InvalidQuantity {
                product: "Pen".to_string()
            }
            .to_string(),
            "Enter a valid quantity for Pen"
        );
        assert_eq!(
            CommitError::NothingToRecord.to_string(),
            "There is nothing to record"
        );
    }
}
