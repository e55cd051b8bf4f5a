//! # Storage Error Types
//!
//! Errors for slot reads/writes and payload decoding.
//!
//! None of these ever reach the user: the store logs them and carries
//! on with its in-memory state as ground truth for the session. They
//! are typed anyway so the logging has structure and the slot trait has
//! an honest signature.

use thiserror::Error;

/// Persistence failures, keyed by the slot they happened on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot's backing could not be read.
    #[error("failed to read storage slot '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The slot's backing could not be written.
    #[error("failed to write storage slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The slot held something that does not decode as a sale array.
    #[error("storage slot '{key}' holds malformed data: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_the_key() {
        let err = StoreError::Read {
            key: "sales".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("'sales'"));

        let bad_json = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        let err = StoreError::Malformed {
            key: "sales".to_string(),
            source: bad_json,
        };
        assert!(err.to_string().contains("malformed"));
    }
}
