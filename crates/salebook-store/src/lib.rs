//! # salebook-store: Persistence Layer for Salebook
//!
//! This crate owns the durable side of the ledger: a single named
//! storage slot holding the JSON-encoded array of sale records, and the
//! [`SaleStore`] that mirrors its in-memory sequence into that slot
//! after every mutation.
//!
//! ## Failure Policy
//! Persistence is best-effort by contract. A missing or malformed slot
//! yields an empty ledger at startup; a failed write is logged and
//! swallowed. The in-memory sequence is authoritative for the session,
//! and no operation is ever blocked or rolled back by storage trouble.
//!
//! ## Usage
//! ```rust
//! use salebook_store::{FileSlot, SaleStore, SALES_SLOT_KEY};
//!
//! # let dir = tempfile::tempdir().unwrap();
//! # let data_dir = dir.path();
//! let slot = FileSlot::new(data_dir, SALES_SLOT_KEY);
//! let store = SaleStore::open(Box::new(slot));
//! assert!(store.is_empty());
//! ```

pub mod error;
pub mod slot;
pub mod store;

pub use error::StoreError;
pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use store::{SaleStore, SALES_SLOT_KEY};
