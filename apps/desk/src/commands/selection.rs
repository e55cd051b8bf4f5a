//! # Selection Commands
//!
//! Marking recorded sales for the next receipt print.
//!
//! Records are addressed by their 1-based position in the ledger
//! display (newest first). Every handler returns the recomputed
//! tri-state so the session can redraw the master control.

use tracing::debug;

use salebook_core::SelectionState;

use crate::error::AppError;
use crate::state::AppState;

/// Toggles the record at the given display position.
///
/// Returns the new tri-state and whether the record is now selected.
pub fn toggle(state: &mut AppState, position: usize) -> Result<(SelectionState, bool), AppError> {
    debug!(position, "toggle_selection command");

    let id = position
        .checked_sub(1)
        .and_then(|i| state.store.records().get(i))
        .map(|sale| sale.id.clone())
        .ok_or_else(|| AppError::not_found("Sale", position))?;

    let now_selected = state.selection.toggle(&id);
    Ok((current(state), now_selected))
}

/// Selects every currently visible record.
pub fn select_all(state: &mut AppState) -> SelectionState {
    debug!("select_all command");

    let ids: Vec<&str> = state.store.records().iter().map(|s| s.id.as_str()).collect();
    state.selection.select_all(ids);
    current(state)
}

/// Clears the selection.
pub fn clear(state: &mut AppState) -> SelectionState {
    debug!("clear_selection command");
    state.selection.clear();
    current(state)
}

/// The master control's tri-state against the current ledger.
///
/// Recomputed on demand, so it tracks both selection changes and
/// ledger growth.
pub fn current(state: &AppState) -> SelectionState {
    state.selection.state(state.store.len())
}

// =============================================================================
// Unit Tests
// =============================================================================
