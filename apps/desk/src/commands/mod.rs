//! # Command Handlers
//!
//! One handler per user action, mirroring what the entry surface can
//! do:
//!
//! ```text
//! commands/
//! ├── mod.rs        ◄─── exports
//! ├── draft.rs      ◄─── add/remove/update entry form rows
//! ├── sale.rs       ◄─── record the draft, summary, ledger export
//! ├── selection.rs  ◄─── toggle / select-all / clear receipt marks
//! └── receipt.rs    ◄─── build + dispatch the printable receipt
//! ```
//!
//! Handlers take `&mut AppState` (plus a print surface where needed),
//! return typed outcomes or an [`AppError`](crate::error::AppError),
//! and never talk to the terminal themselves; rendering belongs to the
//! session loop.

pub mod draft;
pub mod receipt;
pub mod sale;
pub mod selection;
