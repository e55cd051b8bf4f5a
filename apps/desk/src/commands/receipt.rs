//! # Receipt Commands
//!
//! Building the printable receipt for the current selection and
//! dispatching it to the print surface.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  print_receipt                                                  │
//! │                                                                 │
//! │  selection empty? ───────────► validation error, nothing else   │
//! │        │                                                        │
//! │        ▼                                                        │
//! │  resolve ids, oldest-first                                      │
//! │        │  (zero matches: validation error; stale ids never     │
//! │        │   silently print an empty receipt)                     │
//! │        ▼                                                        │
//! │  build Receipt ──► render HTML ──► surface.dispatch()           │
//! │        │                                │                       │
//! │        │                         ok or err; either way:        │
//! │        └────────────────────────► selection cleared             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use tracing::{debug, info};

use salebook_core::{resolve_selection, Money, Receipt};

use crate::error::AppError;
use crate::print::PrintSurface;
use crate::state::AppState;

/// Result of a successful print dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOutcome {
    /// Number of line items on the receipt.
    pub printed: usize,

    /// Combined total of the printed records.
    pub total: Money,

    /// Where the document went, as reported by the surface.
    pub destination: String,
}

/// Renders the selected records as a receipt and dispatches it.
///
/// The selection is cleared after every dispatch attempt, successful or
/// not; only the empty-selection guard leaves state untouched (there is
/// nothing to clear and no surface is contacted).
pub fn print_receipt(
    state: &mut AppState,
    surface: &mut dyn PrintSurface,
) -> Result<PrintOutcome, AppError> {
    debug!(selected = state.selection.len(), "print_receipt command");

    if state.selection.is_empty() {
        return Err(AppError::validation("Select at least one sale to print"));
    }

    let sales = resolve_selection(state.store.records(), &state.selection);
    if sales.is_empty() {
        // Selection held only ids that no longer match any record.
        state.selection.clear();
        return Err(AppError::validation(
            "The selected sales no longer exist in the ledger",
        ));
    }

    let receipt = Receipt::build(&state.config.store_name, &sales, Local::now());
    let document = receipt.to_html();

    let outcome = surface.dispatch(&document);
    // Unconditional: a failed dispatch still consumes the selection.
    state.selection.clear();

    match outcome {
        Ok(destination) => {
            info!(
                lines = receipt.lines.len(),
                total = %receipt.grand_total,
                "Receipt dispatched"
            );
            Ok(PrintOutcome {
                printed: receipt.lines.len(),
                total: receipt.grand_total,
                destination,
            })
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
