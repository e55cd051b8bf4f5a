//! # Storage Slot
//!
//! The durable key-value entry the ledger is mirrored into.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Storage Slot Seam                          │
//! │                                                                 │
//! │   SaleStore ── notifies after every mutation ──► StorageSlot    │
//! │                                                      │          │
//! │                              ┌───────────────────────┤          │
//! │                              ▼                       ▼          │
//! │                          FileSlot               MemorySlot      │
//! │                     <data_dir>/<key>.json      (tests only)     │
//! │                                                                 │
//! │   The store never touches a file directly; swapping the slot    │
//! │   swaps the persistence mechanics without touching business     │
//! │   logic.                                                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot speaks raw strings. Encoding to and from the sale array is
//! the store's job, so a slot implementation stays a dumb byte carrier.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Trait
// =============================================================================

/// A single named key-value entry.
///
/// `load` yields `None` when the entry has never been written; `save`
/// replaces the value wholesale.
pub trait StorageSlot {
    /// The slot's key, used in log lines and error context.
    fn key(&self) -> &str;

    /// Reads the current value, if any.
    fn load(&self) -> StoreResult<Option<String>>;

    /// Replaces the value.
    fn save(&self, payload: &str) -> StoreResult<()>;
}

// =============================================================================
// File-Backed Slot
// =============================================================================

/// Production slot: the key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot for `key` under the given directory.
    ///
    /// ## Example
    /// ```rust,no_run
    /// use salebook_store::FileSlot;
    ///
    /// let slot = FileSlot::new("/home/user/.local/share/salebook", "sales");
    /// ```
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let dir = dir.into();
        FileSlot {
            key: key.to_string(),
            path: dir.join(format!("{key}.json")),
        }
    }

    /// The file the slot writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            key: self.key.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            key: self.key.clone(),
            source,
        }
    }
}

impl StorageSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.read_error(e)),
        }
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        fs::write(&self.path, payload).map_err(|e| self.write_error(e))
    }
}

// =============================================================================
// In-Memory Slot
// =============================================================================

/// Test double: holds the value in memory.
///
/// Also handy as an explicit "no persistence" mode; the session is
/// single-threaded, so interior mutability via `RefCell` is enough.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        MemorySlot::default()
    }

    /// Creates a slot pre-seeded with a payload.
    pub fn with_payload(payload: &str) -> Self {
        MemorySlot {
            value: RefCell::new(Some(payload.to_string())),
        }
    }

    /// The current raw payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn key(&self) -> &str {
        "memory"
    }

    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        *self.value.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
