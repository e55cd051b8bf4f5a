//! # Selection Set
//!
//! Tracks which persisted sales are marked for the next receipt print,
//! and the tri-state of the master select-all control.
//!
//! The master control is driven by one enumerated state computed from
//! `(selection size, total record count)` and handed to the view layer
//! as data:
//!
//! ```text
//!   selected == 0            ──► None      (unchecked)
//!   selected == total  (> 0) ──► All       (checked)
//!   otherwise                ──► Partial   (indeterminate)
//! ```
//!
//! It must be recomputed whenever either the selection or the record
//! count changes.

use std::collections::HashSet;

// =============================================================================
// Tri-State
// =============================================================================

/// Displayed state of the master select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Empty selection.
    None,
    /// Non-empty selection smaller than the ledger.
    Partial,
    /// Every visible record is selected.
    All,
}

impl SelectionState {
    /// Computes the tri-state from the selection size and record count.
    pub fn compute(selected: usize, total: usize) -> Self {
        if selected == 0 || total == 0 {
            SelectionState::None
        } else if selected == total {
            SelectionState::All
        } else {
            SelectionState::Partial
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The set of sale ids chosen for the next receipt print.
///
/// Initially empty; cleared unconditionally after every print dispatch
/// attempt. Membership is by id, so the set survives re-ordering of the
/// ledger display.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Toggles a single id; returns `true` when the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Selects every id in the given visible set, replacing the current
    /// selection.
    pub fn select_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ids = ids.into_iter().map(str::to_string).collect();
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the given id is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Tri-state of the master control against the given record count.
    pub fn state(&self, total: usize) -> SelectionState {
        SelectionState::compute(self.len(), total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
