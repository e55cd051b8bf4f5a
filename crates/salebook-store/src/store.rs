//! # Sale Record Store
//!
//! The authoritative in-memory sequence of committed sales, mirrored to
//! a storage slot after every mutation.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Store ↔ Slot Lifecycle                       │
//! │                                                                 │
//! │  open(slot)                                                     │
//! │     ├── slot empty          ──► start with no records           │
//! │     ├── slot malformed      ──► warn, start with no records     │
//! │     └── slot readable       ──► decode newest-first sequence    │
//! │                                                                 │
//! │  commit_batch(batch)  ──► prepend batch ──► persist (best       │
//! │  replace_all(records) ──► swap sequence ──► effort: a failed    │
//! │                                             write is logged and │
//! │                                             swallowed)          │
//! │                                                                 │
//! │  In-memory state is ground truth for the session. Nothing here  │
//! │  ever rolls back because a disk write failed.                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error, info, warn};

use salebook_core::Sale;

use crate::error::StoreError;
use crate::slot::StorageSlot;

/// Slot key the application ledger lives under.
pub const SALES_SLOT_KEY: &str = "sales";

// =============================================================================
// Sale Store
// =============================================================================

/// Ordered sequence of sale records, most-recent-first.
pub struct SaleStore {
    records: Vec<Sale>,
    slot: Box<dyn StorageSlot>,
}

impl SaleStore {
    /// Opens the store over the given slot.
    ///
    /// A missing or malformed payload yields an empty store; the
    /// failure is logged and never blocks startup.
    pub fn open(slot: Box<dyn StorageSlot>) -> Self {
        let records = match slot.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Sale>>(&payload) {
                Ok(records) => {
                    debug!(key = slot.key(), count = records.len(), "Ledger loaded");
                    records
                }
                Err(e) => {
                    let err = StoreError::Malformed {
                        key: slot.key().to_string(),
                        source: e,
                    };
                    warn!(%err, "Ignoring stored ledger, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(key = slot.key(), "No stored ledger, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(%err, "Could not read stored ledger, starting empty");
                Vec::new()
            }
        };

        SaleStore { records, slot }
    }

    /// The records, newest-first.
    pub fn records(&self) -> &[Sale] {
        &self.records
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by id.
    pub fn find(&self, id: &str) -> Option<&Sale> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Prepends a committed batch, preserving the batch's internal
    /// order, then mirrors the full sequence to the slot.
    pub fn commit_batch(&mut self, batch: Vec<Sale>) {
        info!(count = batch.len(), "Recording sale batch");
        let mut records = batch;
        records.append(&mut self.records);
        self.records = records;
        self.persist();
    }

    /// Replaces the whole collection (external reset). The only way a
    /// record ever leaves the store.
    pub fn replace_all(&mut self, records: Vec<Sale>) {
        info!(count = records.len(), "Replacing ledger");
        self.records = records;
        self.persist();
    }

    /// Serializes the current ledger to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Best-effort mirror of the in-memory sequence into the slot.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.records) {
            Ok(payload) => payload,
            Err(e) => {
                error!(key = self.slot.key(), %e, "Could not encode ledger; keeping in-memory state");
                return;
            }
        };

        if let Err(err) = self.slot.save(&payload) {
            error!(%err, "Could not persist ledger; keeping in-memory state");
        }
    }
}

impl std::fmt::Debug for SaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleStore")
            .field("records", &self.records.len())
            .field("slot", &self.slot.key())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{FileSlot, MemorySlot};
    use salebook_core::Money;

    /// Slot whose writes always fail, for persistence-failure behavior.
    struct BrokenSlot;

    impl StorageSlot for BrokenSlot {
        fn key(&self) -> &str {
            "broken"
        }

        fn load(&self) -> crate::error::StoreResult<Option<String>> {
            Err(StoreError::Read {
                key: "broken".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
            })
        }

        fn save(&self, _payload: &str) -> crate::error::StoreResult<()> {
            Err(StoreError::Write {
                key: "broken".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
            })
        }
    }

    fn sale(id: &str, name: &str) -> Sale {
        Sale {
            id: id.to_string(),
            product_name: name.to_string(),
            quantity: 1,
            sell_price: Money::from_kobo(100),
            total_amount: Money::from_kobo(100),
            date: "2025-08-07 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_open_empty_slot() {
        let store = SaleStore::open(Box::new(MemorySlot::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_malformed_slot_starts_empty() {
        let store = SaleStore::open(Box::new(MemorySlot::with_payload("not json at all")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_unreadable_slot_starts_empty() {
        let store = SaleStore::open(Box::new(BrokenSlot));
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_batch_prepends_preserving_batch_order() {
        let mut store = SaleStore::open(Box::new(MemorySlot::new()));
        store.commit_batch(vec![sale("a", "Pen")]);
        store.commit_batch(vec![sale("b", "Book"), sale("c", "Crayons")]);

        let ids: Vec<&str> = store.records().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(store.len(), 3);
        assert!(store.find("c").is_some());
        assert!(store.find("zzz").is_none());
    }

    #[test]
    fn test_every_mutation_mirrors_to_the_slot() {
        // Re-open over the same backing file to prove the write landed.
        let dir = tempfile::tempdir().unwrap();
        let file_slot = FileSlot::new(dir.path(), SALES_SLOT_KEY);
        let mut store = SaleStore::open(Box::new(file_slot.clone()));
        store.commit_batch(vec![sale("a", "Pen"), sale("b", "Book")]);

        let reopened = SaleStore::open(Box::new(file_slot));
        assert_eq!(reopened.records(), store.records());
    }

    #[test]
    fn test_persistence_round_trip_is_identical() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SaleStore::open(Box::new(FileSlot::new(dir.path(), SALES_SLOT_KEY)));
        store.commit_batch(vec![sale("a", "Pen")]);
        store.commit_batch(vec![sale("b", "Book")]);
        let before: Vec<Sale> = store.records().to_vec();

        let reopened = SaleStore::open(Box::new(FileSlot::new(dir.path(), SALES_SLOT_KEY)));
        assert_eq!(reopened.records(), &before[..]);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_state() {
        let mut store = SaleStore::open(Box::new(BrokenSlot));
        store.commit_batch(vec![sale("a", "Pen")]);

        // The write failed, but the session's ground truth is intact.
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].product_name, "Pen");
    }

    #[test]
    fn test_replace_all() {
        let mut store = SaleStore::open(Box::new(MemorySlot::new()));
        store.commit_batch(vec![sale("a", "Pen")]);

        store.replace_all(vec![sale("x", "Crate"), sale("y", "Box")]);

        let ids: Vec<&str> = store.records().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }
}
