//! # App Error Type
//!
//! Unified error envelope for command handlers.
//!
//! ## Error Flow
//! ```text
//! CommitError (core)  ──┐
//! PrintError (print)  ──┼──► AppError { code, message } ──► session
//!  handler-level       ──┘                                  prints it
//! ```
//!
//! Every handler returns `Result<T, AppError>`; the session shows the
//! message and, for print-surface failures, treats it as a blocking
//! notification. Persistence failures never appear here; the store
//! swallows them by contract.

use salebook_core::CommitError;
use thiserror::Error;

use crate::print::PrintError;

/// Machine-readable category of a handler failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// User input needs fixing (commit validation, bad row number, ...).
    Validation,

    /// A referenced row or record does not exist.
    NotFound,

    /// The print surface could not be obtained or written.
    PrintSurface,

    /// Anything else.
    Internal,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Creates a new error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Validation, message)
    }

    /// Creates a not-found error.
    pub fn not_found(what: &str, which: impl std::fmt::Display) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{what} {which} does not exist"))
    }
}

/// A failed commit surfaces its single message verbatim.
impl From<CommitError> for AppError {
    fn from(err: CommitError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Print-surface trouble is a blocking notification, not a crash.
impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        AppError::new(ErrorCode::PrintSurface, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
