//! # Sale Commands
//!
//! Recording the draft batch, the ledger summary, and the JSON export.

use tracing::{debug, info};

use salebook_core::{commit, Money, Summary};

use crate::error::AppError;
use crate::state::AppState;

/// Result of a successful batch commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSalesOutcome {
    /// Number of records added to the ledger.
    pub recorded: usize,

    /// Combined total of the new batch.
    pub batch_total: Money,
}

/// Records the current draft as finalized sales.
///
/// All-or-nothing: either the whole batch lands at the top of the
/// ledger, the draft resets to a single blank row and any prior error
/// is cleared, or nothing changes except `last_error`.
pub fn record_sales(state: &mut AppState) -> Result<RecordSalesOutcome, AppError> {
    debug!(rows = state.draft.len(), "record_sales command");

    match commit(&state.draft) {
        Ok(batch) => {
            let outcome = RecordSalesOutcome {
                recorded: batch.len(),
                batch_total: batch.iter().map(|s| s.total_amount).sum(),
            };

            state.store.commit_batch(batch);
            state.draft.reset();
            state.last_error = None;

            info!(
                recorded = outcome.recorded,
                total = %outcome.batch_total,
                ledger = state.store.len(),
                "Sales recorded"
            );
            Ok(outcome)
        }
        Err(e) => {
            // Draft stays untouched so the user can correct it.
            state.last_error = Some(e.to_string());
            Err(e.into())
        }
    }
}

/// Recomputes the running totals over the whole ledger.
pub fn ledger_summary(state: &AppState) -> Summary {
    Summary::of(state.store.records())
}

/// Serializes the ledger for export, newest-first.
pub fn export_ledger(state: &AppState) -> Result<String, AppError> {
    debug!("export_ledger command");
    state
        .store
        .to_json()
        .map_err(|e| AppError::new(crate::error::ErrorCode::Internal, e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
