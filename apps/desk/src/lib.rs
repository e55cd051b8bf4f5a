//! # Salebook Desk Library
//!
//! Startup and wiring for the interactive ledger application.
//!
//! ## Module Organization
//! ```text
//! salebook_desk/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState: store, draft, selection, config
//! │   └── config.rs   ◄─── Configuration (env overrides + defaults)
//! ├── commands/
//! │   ├── draft.rs    ◄─── entry form editing
//! │   ├── sale.rs     ◄─── batch recording, summary, export
//! │   ├── selection.rs◄─── receipt marks + tri-state
//! │   └── receipt.rs  ◄─── receipt build & dispatch
//! ├── print.rs        ◄─── print surface (receipt file + opener)
//! ├── session.rs      ◄─── interactive line loop
//! └── error.rs        ◄─── AppError envelope
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Resolve configuration (env overrides, platform data dir)
//! 3. Open the sale store over its storage slot (failures swallowed;
//!    a broken slot means an empty ledger, never a refusal to start)
//! 4. Run the interactive session on stdin/stdout

pub mod commands;
pub mod error;
pub mod print;
pub mod session;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use salebook_store::{FileSlot, SaleStore, SALES_SLOT_KEY};

use print::SystemPrintSurface;
use session::run_session;
use state::{AppState, Config};

/// Runs the application.
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(data_dir = %config.data_dir.display(), "Starting Salebook");

    let slot = FileSlot::new(&config.data_dir, SALES_SLOT_KEY);
    let store = SaleStore::open(Box::new(slot));

    let mut surface = SystemPrintSurface::new(&config.receipts_dir);
    let mut state = AppState::new(config, store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut state,
        &mut surface,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show every command
/// - Default: warnings only, so the session output stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,salebook_desk=info,salebook_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
