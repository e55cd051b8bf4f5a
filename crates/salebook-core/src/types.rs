//! # Domain Types
//!
//! Core domain types used throughout Salebook.
//!
//! A `Sale` is one finalized transaction. It is created only by the
//! committer on a successful form submission, never mutated afterwards,
//! and removed only by bulk replacement of the whole ledger. The derived
//! `total_amount` is computed once at creation and stored, not
//! recomputed on read.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Sale
// =============================================================================

/// A finalized, immutable sale record.
///
/// ## Wire Form
/// Serialized into the storage slot as camelCase JSON:
/// ```json
/// {
///   "id": "250807143015-1f9ac2d4",
///   "productName": "Pen",
///   "quantity": 3,
///   "sellPrice": 1000,
///   "totalAmount": 3000,
///   "date": "2025-08-07 14:30:15"
/// }
/// ```
/// Monetary fields are integer kobo (see [`Money`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier, assigned at commit time; never reused.
    pub id: String,

    /// Product name, trimmed and non-empty.
    pub product_name: String,

    /// Units sold. Invariant: `> 0`.
    pub quantity: i64,

    /// Unit price. Invariant: `> 0`.
    pub sell_price: Money,

    /// `sell_price × quantity`, frozen at creation.
    pub total_amount: Money,

    /// Human-readable creation timestamp, fixed at commit time.
    pub date: String,
}

impl Sale {
    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.sell_price
    }

    /// Returns the stored line total.
    #[inline]
    pub fn total(&self) -> Money {
        self.total_amount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
