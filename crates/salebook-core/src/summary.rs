//! # Summary Aggregator
//!
//! Derived, non-persisted totals over the current ledger.
//!
//! A full O(n) recompute on every call; the ledger is bounded by
//! realistic manual data entry, so there is no cache and no staleness
//! window to reason about.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Sale;

/// Aggregate statistics over all recorded sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of every record's stored `total_amount`.
    pub total_revenue: Money,

    /// Number of records in the ledger.
    pub total_sales: usize,
}

impl Summary {
    /// Recomputes the summary from the given records.
    pub fn of(records: &[Sale]) -> Self {
        Summary {
            total_revenue: records.iter().map(|s| s.total_amount).sum(),
            total_sales: records.len(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
