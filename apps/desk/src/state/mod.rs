//! # Application State
//!
//! One explicit state struct owned by the session loop and passed by
//! mutable reference into every command handler. No ambient globals,
//! and, with a strictly synchronous session, no locking: each user
//! action runs to completion before the next line is read.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         AppState                                │
//! │                                                                 │
//! │   store       SaleStore   (ledger + persistence mirror)         │
//! │   draft       DraftForm   (the multi-row entry form)            │
//! │   selection   Selection   (ids marked for the next receipt)     │
//! │   last_error  Option<..>  (message from the last failed commit) │
//! │   config      Config      (store name, directories)             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::Config;

use salebook_core::{DraftForm, Selection};
use salebook_store::SaleStore;

/// Everything a command handler can see or change.
#[derive(Debug)]
pub struct AppState {
    /// The authoritative ledger.
    pub store: SaleStore,

    /// Work-in-progress entry form.
    pub draft: DraftForm,

    /// Records marked for the next receipt print.
    pub selection: Selection,

    /// Message from the last failed commit; cleared by the next
    /// successful one. The session shows it alongside the draft.
    pub last_error: Option<String>,

    /// Startup configuration.
    pub config: Config,
}

impl AppState {
    /// Creates the state over an already-opened store.
    pub fn new(config: Config, store: SaleStore) -> Self {
        AppState {
            store,
            draft: DraftForm::new(),
            selection: Selection::new(),
            last_error: None,
            config,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use salebook_store::MemorySlot;
    use std::path::PathBuf;

    /// State over an in-memory slot, for handler tests.
    pub fn state() -> AppState {
        let config = Config {
            store_name: "Test Shop".to_string(),
            data_dir: PathBuf::from("/tmp/salebook-test"),
            receipts_dir: PathBuf::from("/tmp/salebook-test/receipts"),
        };
        AppState::new(config, SaleStore::open(Box::new(MemorySlot::new())))
    }
}
