//! # Configuration
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SALEBOOK_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization; the session never reconfigures
//! itself mid-run.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shop name, used as the receipt title.
    pub store_name: String,

    /// Directory holding the storage slot file.
    pub data_dir: PathBuf,

    /// Directory rendered receipt documents are written into.
    pub receipts_dir: PathBuf,
}

impl Config {
    /// Resolves configuration from the environment and platform
    /// defaults.
    ///
    /// ## Environment Variables
    /// - `SALEBOOK_DATA_DIR`: override the data directory (receipts go
    ///   into a `receipts/` subdirectory of it)
    /// - `SALEBOOK_STORE_NAME`: override the shop name on receipts
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os("SALEBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let store_name = std::env::var("SALEBOOK_STORE_NAME")
            .unwrap_or_else(|_| "Salebook".to_string());

        Config {
            store_name,
            receipts_dir: data_dir.join("receipts"),
            data_dir,
        }
    }
}

/// Platform app-data directory, with a local fallback when the
/// environment provides no home.
///
/// - **macOS**: `~/Library/Application Support/dev.salebook.salebook`
/// - **Windows**: `%APPDATA%\salebook\salebook\data`
/// - **Linux**: `~/.local/share/salebook`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "salebook", "salebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./salebook-data"))
}

// =============================================================================
// Unit Tests
// =============================================================================
