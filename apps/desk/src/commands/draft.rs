//! # Draft Commands
//!
//! Handlers for editing the multi-row entry form. Rows are addressed by
//! their 1-based position as the session displays them; the synthetic
//! row ids stay internal to the form.

use tracing::debug;

use salebook_core::DraftField;

use crate::error::AppError;
use crate::state::AppState;

/// Appends a blank row; returns its 1-based position.
pub fn add_row(state: &mut AppState) -> usize {
    debug!("add_row command");
    state.draft.add_row();
    state.draft.len()
}

/// Removes the row at the given 1-based position.
///
/// ## Behavior
/// - Unknown position: not-found error.
/// - Last remaining row: validation error; the form never goes empty.
pub fn remove_row(state: &mut AppState, position: usize) -> Result<(), AppError> {
    debug!(position, "remove_row command");

    let row_id = row_id_at(state, position)?;

    if state.draft.remove_row(row_id) {
        Ok(())
    } else {
        Err(AppError::validation("The last row cannot be removed"))
    }
}

/// Replaces one field of the row at the given 1-based position.
///
/// No validation happens here; anything typed is accepted until the
/// batch is recorded.
pub fn update_field(
    state: &mut AppState,
    position: usize,
    field: DraftField,
    value: &str,
) -> Result<(), AppError> {
    debug!(position, ?field, value, "update_field command");

    let row_id = row_id_at(state, position)?;
    state.draft.update_field(row_id, field, value);
    Ok(())
}

fn row_id_at(state: &AppState, position: usize) -> Result<u64, AppError> {
    position
        .checked_sub(1)
        .and_then(|i| state.draft.rows().get(i))
        .map(|row| row.id)
        .ok_or_else(|| AppError::not_found("Row", position))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::test_support::state;

    #[test]
    fn test_add_and_remove() {
        let mut state = state();

        assert_eq!(add_row(&mut state), 2);
        assert_eq!(add_row(&mut state), 3);

        remove_row(&mut state, 2).unwrap();
        assert_eq!(state.draft.len(), 2);
    }

    #[test]
    fn test_remove_last_row_is_rejected() {
        let mut state = state();

        let err = remove_row(&mut state, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(state.draft.len(), 1);
    }

    #[test]
    fn test_remove_unknown_position() {
        let mut state = state();
        add_row(&mut state);

        let err = remove_row(&mut state, 9).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = remove_row(&mut state, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_update_field() {
        let mut state = state();

        update_field(&mut state, 1, DraftField::ProductName, "Pen").unwrap();
        update_field(&mut state, 1, DraftField::Quantity, "not a number yet").unwrap();

        let row = &state.draft.rows()[0];
        assert_eq!(row.product_name, "Pen");
        assert_eq!(row.quantity, "not a number yet");
    }
}
