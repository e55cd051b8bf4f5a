//! # Print Surface
//!
//! Where a finished receipt document goes.
//!
//! The renderer produces a self-contained HTML document; this module
//! owns getting it in front of the user. The production surface writes
//! the document into the receipts directory and hands it to the
//! platform opener, whose viewer raises the actual print dialog.
//! Dispatch is fire-and-forget: nothing here ever learns whether the
//! user really printed.
//!
//! Failure to obtain a surface is reported to the caller (and from
//! there to the user); it is never fatal and never retried.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// Errors
// =============================================================================

/// Why a receipt could not be dispatched.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The document could not be written where the surface expects it.
    #[error("Could not write the receipt document: {0}")]
    DocumentWrite(#[from] std::io::Error),

    /// No print-capable viewer could be launched.
    #[error("Could not open a print window: {0}")]
    SurfaceUnavailable(String),
}

// =============================================================================
// Trait
// =============================================================================

/// A destination that can take a rendered receipt document.
///
/// Returns a human-readable description of where the document went,
/// for the session to echo back.
pub trait PrintSurface {
    fn dispatch(&mut self, document: &str) -> Result<String, PrintError>;
}

// =============================================================================
// System Surface
// =============================================================================

/// Production surface: receipt file plus the platform opener.
#[derive(Debug, Clone)]
pub struct SystemPrintSurface {
    receipts_dir: PathBuf,
}

impl SystemPrintSurface {
    /// Creates a surface writing receipts under the given directory.
    pub fn new(receipts_dir: impl Into<PathBuf>) -> Self {
        SystemPrintSurface {
            receipts_dir: receipts_dir.into(),
        }
    }

    fn document_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        self.receipts_dir.join(format!("receipt-{stamp}.html"))
    }
}

impl PrintSurface for SystemPrintSurface {
    fn dispatch(&mut self, document: &str) -> Result<String, PrintError> {
        fs::create_dir_all(&self.receipts_dir)?;
        let path = self.document_path();
        fs::write(&path, document)?;
        debug!(?path, "Receipt document written");

        let (program, args) = opener_command();
        let spawned = Command::new(program)
            .args(args)
            .arg(&path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_) => Ok(format!("Receipt opened for printing ({})", path.display())),
            Err(e) => {
                warn!(%e, "Platform opener unavailable");
                Err(PrintError::SurfaceUnavailable(format!(
                    "{e}; the receipt was saved to {}",
                    path.display()
                )))
            }
        }
    }
}

/// Platform-specific viewer launcher.
///
/// - **Linux**: `xdg-open <file>`
/// - **macOS**: `open <file>`
/// - **Windows**: `cmd /C start "" <file>`
fn opener_command() -> (&'static str, &'static [&'static str]) {
    #[cfg(target_os = "macos")]
    {
        ("open", &[])
    }
    #[cfg(target_os = "windows")]
    {
        ("cmd", &["/C", "start", ""])
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        ("xdg-open", &[])
    }
}

// =============================================================================
// Test Doubles
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================
