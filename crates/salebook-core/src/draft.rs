//! # Draft Form Model
//!
//! The multi-row work-in-progress entry form the user edits before
//! committing a batch of sales.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Draft Form Operations                        │
//! │                                                                 │
//! │  User Action              Handler                 Form Change   │
//! │  ───────────              ───────                 ───────────   │
//! │  Add line      ─────────► add_row()       ─────►  rows.push     │
//! │  Remove line   ─────────► remove_row(id)  ─────►  rows.retain   │
//! │  Type in field ─────────► update_field()  ─────►  row.field = v │
//! │  Save batch    ─────────► (committer)     ─────►  reset()       │
//! │                                                                 │
//! │  NOTE: No validation happens here. Fields hold raw text and     │
//! │        are checked only when the batch is committed.            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Draft Row
// =============================================================================

/// One in-progress, unvalidated line item.
///
/// Fields are free text exactly as typed; they may be empty or invalid
/// until commit time. The `id` is a local synthetic key for list
/// identity only and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    /// Local-only synthetic key.
    pub id: u64,

    /// Product name as typed.
    pub product_name: String,

    /// Unit price as typed.
    pub sell_price: String,

    /// Quantity as typed.
    pub quantity: String,
}

impl DraftRow {
    fn blank(id: u64) -> Self {
        DraftRow {
            id,
            product_name: String::new(),
            sell_price: String::new(),
            quantity: String::new(),
        }
    }

    /// A row is blank when all three fields are empty after trimming.
    /// Blank rows are skipped by the committer rather than rejected.
    pub fn is_blank(&self) -> bool {
        self.product_name.trim().is_empty()
            && self.sell_price.trim().is_empty()
            && self.quantity.trim().is_empty()
    }
}

// =============================================================================
// Draft Field Selector
// =============================================================================

/// Which field of a draft row an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    ProductName,
    SellPrice,
    Quantity,
}

impl DraftField {
    /// Resolves the short field names used by the entry surface.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" | "product" => Some(DraftField::ProductName),
            "price" => Some(DraftField::SellPrice),
            "qty" | "quantity" => Some(DraftField::Quantity),
            _ => None,
        }
    }
}

// =============================================================================
// Draft Form
// =============================================================================

/// The ordered collection of draft rows.
///
/// ## Invariants
/// - Always contains at least one row; removing the last remaining row
///   is a no-op.
/// - Row ids are unique for the lifetime of the form and never reused.
#[derive(Debug, Clone)]
pub struct DraftForm {
    rows: Vec<DraftRow>,
    next_id: u64,
}

impl DraftForm {
    /// Creates a form holding a single blank row.
    pub fn new() -> Self {
        DraftForm {
            rows: vec![DraftRow::blank(1)],
            next_id: 2,
        }
    }

    /// Returns the rows in entry order.
    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    /// Number of rows currently in the form (always >= 1).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The form always has at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends a new blank row and returns its synthetic id.
    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(DraftRow::blank(id));
        id
    }

    /// Removes the row with the given id.
    ///
    /// ## Behavior
    /// - No-op (returns `false`) when the id is unknown.
    /// - No-op (returns `false`) when only one row remains; the form
    ///   never becomes empty.
    pub fn remove_row(&mut self, row_id: u64) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }

        let initial_len = self.rows.len();
        self.rows.retain(|r| r.id != row_id);
        self.rows.len() != initial_len
    }

    /// Replaces one field of one row with the given raw text.
    ///
    /// No validation happens here; checks are deferred to commit.
    /// Returns `false` when the id is unknown.
    pub fn update_field(&mut self, row_id: u64, field: DraftField, value: &str) -> bool {
        match self.rows.iter_mut().find(|r| r.id == row_id) {
            Some(row) => {
                match field {
                    DraftField::ProductName => row.product_name = value.to_string(),
                    DraftField::SellPrice => row.sell_price = value.to_string(),
                    DraftField::Quantity => row.quantity = value.to_string(),
                }
                true
            }
            None => false,
        }
    }

    /// Resets the form to a single blank row (after a successful
    /// commit). Previously issued ids stay retired.
    pub fn reset(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.rows = vec![DraftRow::blank(id)];
    }
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_one_blank_row() {
        let form = DraftForm::new();
        assert_eq!(form.len(), 1);
        assert!(form.rows()[0].is_blank());
    }

    #[test]
    fn test_add_row_issues_fresh_ids() {
        let mut form = DraftForm::new();
        let a = form.add_row();
        let b = form.add_row();

        assert_eq!(form.len(), 3);
        assert_ne!(a, b);
        assert_ne!(a, form.rows()[0].id);
    }

    #[test]
    fn test_remove_row() {
        let mut form = DraftForm::new();
        let added = form.add_row();

        assert!(form.remove_row(added));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut form = DraftForm::new();
        let only = form.rows()[0].id;

        assert!(!form.remove_row(only));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut form = DraftForm::new();
        form.add_row();

        assert!(!form.remove_row(999));
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn test_update_field() {
        let mut form = DraftForm::new();
        let id = form.rows()[0].id;

        assert!(form.update_field(id, DraftField::ProductName, "Pen"));
        assert!(form.update_field(id, DraftField::Quantity, "3"));
        assert!(form.update_field(id, DraftField::SellPrice, "10.00"));

        let row = &form.rows()[0];
        assert_eq!(row.product_name, "Pen");
        assert_eq!(row.quantity, "3");
        assert_eq!(row.sell_price, "10.00");
        assert!(!row.is_blank());

        assert!(!form.update_field(999, DraftField::ProductName, "x"));
    }

    #[test]
    fn test_reset_returns_to_single_blank_row() {
        let mut form = DraftForm::new();
        let id = form.rows()[0].id;
        form.update_field(id, DraftField::ProductName, "Pen");
        form.add_row();

        form.reset();

        assert_eq!(form.len(), 1);
        assert!(form.rows()[0].is_blank());
        assert_ne!(form.rows()[0].id, id);
    }

    #[test]
    fn test_blank_detection_ignores_whitespace() {
        let mut form = DraftForm::new();
        let id = form.rows()[0].id;
        form.update_field(id, DraftField::ProductName, "   ");

        assert!(form.rows()[0].is_blank());
    }

    #[test]
    fn test_field_selector_parse() {
        assert_eq!(DraftField::parse("name"), Some(DraftField::ProductName));
        assert_eq!(DraftField::parse("qty"), Some(DraftField::Quantity));
        assert_eq!(DraftField::parse("price"), Some(DraftField::SellPrice));
        assert_eq!(DraftField::parse("color"), None);
    }
}
