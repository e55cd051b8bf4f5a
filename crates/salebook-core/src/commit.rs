//! # Batch Committer
//!
//! Turns the draft form into finalized [`Sale`] records, all-or-nothing.
//!
//! ## Commit Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Commit a Draft Batch                        │
//! │                                                                 │
//! │  for each row, in entry order:                                  │
//! │       │                                                         │
//! │       ├── all three fields blank? ──► skip row                  │
//! │       │                                                         │
//! │       ├── name blank?          ──► abort: NameRequired          │
//! │       ├── quantity invalid?    ──► abort: InvalidQuantity       │
//! │       ├── price invalid?       ──► abort: InvalidPrice          │
//! │       │                                                         │
//! │       └── ok ──► Sale { id, name, qty, price, qty×price, date } │
//! │                                                                 │
//! │  zero rows survived (all skipped)? ──► abort: NothingToRecord   │
//! │                                                                 │
//! │  The first failing row wins; later rows are never inspected     │
//! │  and no partial batch escapes.                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::draft::DraftForm;
use crate::error::{CommitError, CommitResult};
use crate::types::Sale;
use crate::validation::{parse_price, parse_product_name, parse_quantity};

/// Format of the human-readable `date` field frozen into each record.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Commit
// =============================================================================

/// Validates the whole draft and produces the finalized batch.
///
/// Returns the new records in draft order, or the single error that
/// aborted the batch. The draft itself is untouched either way; on
/// success the caller resets it and hands the batch to the store.
///
/// ## Example
/// ```rust
/// use salebook_core::draft::{DraftField, DraftForm};
/// use salebook_core::commit::commit;
///
/// let mut form = DraftForm::new();
/// let row = form.rows()[0].id;
/// form.update_field(row, DraftField::ProductName, "Pen");
/// form.update_field(row, DraftField::Quantity, "3");
/// form.update_field(row, DraftField::SellPrice, "10.00");
///
/// let batch = commit(&form).unwrap();
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch[0].total_amount.kobo(), 3000);
/// ```
pub fn commit(draft: &DraftForm) -> CommitResult<Vec<Sale>> {
    commit_at(draft, Local::now())
}

/// Commit with an explicit clock, so tests can pin the timestamp.
pub fn commit_at(draft: &DraftForm, now: DateTime<Local>) -> CommitResult<Vec<Sale>> {
    let mut batch = Vec::new();

    for row in draft.rows() {
        if row.is_blank() {
            continue;
        }

        // Fixed field order; the first failure aborts the whole batch.
        let product_name =
            parse_product_name(&row.product_name).map_err(|_| CommitError::NameRequired)?;

        let quantity =
            parse_quantity(&row.quantity).map_err(|_| CommitError::InvalidQuantity {
                product: product_name.clone(),
            })?;

        let sell_price = parse_price(&row.sell_price).map_err(|_| CommitError::InvalidPrice {
            product: product_name.clone(),
        })?;

        batch.push(Sale {
            id: generate_sale_id(now),
            product_name,
            quantity,
            total_amount: sell_price.multiply_quantity(quantity),
            sell_price,
            date: now.format(DATE_FORMAT).to_string(),
        });
    }

    if batch.is_empty() {
        return Err(CommitError::NothingToRecord);
    }

    Ok(batch)
}

/// Generates a sale id: compact commit timestamp plus a random suffix.
///
/// Ids are never reused; the UUID fragment keeps records distinct even
/// within a single batch committed in one clock tick.
fn generate_sale_id(now: DateTime<Local>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.format("%y%m%d%H%M%S"), &suffix[..8])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftField;
    use crate::money::Money;

    fn form_with_rows(rows: &[(&str, &str, &str)]) -> DraftForm {
        let mut form = DraftForm::new();
        for (i, (name, qty, price)) in rows.iter().enumerate() {
            let id = if i == 0 {
                form.rows()[0].id
            } else {
                form.add_row()
            };
            form.update_field(id, DraftField::ProductName, name);
            form.update_field(id, DraftField::Quantity, qty);
            form.update_field(id, DraftField::SellPrice, price);
        }
        form
    }

    #[test]
    fn test_single_valid_row() {
        let form = form_with_rows(&[("Pen", "3", "10.00")]);
        let batch = commit(&form).unwrap();

        assert_eq!(batch.len(), 1);
        let sale = &batch[0];
        assert_eq!(sale.product_name, "Pen");
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.sell_price, Money::from_kobo(1000));
        assert_eq!(sale.total_amount, Money::from_kobo(3000));
        assert!(!sale.id.is_empty());
        assert!(!sale.date.is_empty());
    }

    #[test]
    fn test_batch_keeps_draft_order() {
        let form = form_with_rows(&[("Pen", "3", "10.00"), ("Book", "1", "25.50")]);
        let batch = commit(&form).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].product_name, "Pen");
        assert_eq!(batch[1].product_name, "Book");
        assert_eq!(batch[1].total_amount, Money::from_kobo(2550));
    }

    #[test]
    fn test_total_is_quantity_times_price() {
        let form = form_with_rows(&[("Eraser", "7", "2.50")]);
        let batch = commit(&form).unwrap();
        assert_eq!(batch[0].total_amount, Money::from_kobo(1750));
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let form = form_with_rows(&[("Pen", "3", "10.00"), ("", "", "")]);
        let batch = commit(&form).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_all_blank_draft_is_nothing_to_record() {
        let form = DraftForm::new();
        assert_eq!(commit(&form), Err(CommitError::NothingToRecord));

        let mut several = DraftForm::new();
        several.add_row();
        several.add_row();
        assert_eq!(commit(&several), Err(CommitError::NothingToRecord));
    }

    #[test]
    fn test_blank_name_aborts_whole_batch() {
        let form = form_with_rows(&[("Pen", "3", "10.00"), ("", "1", "5")]);
        assert_eq!(commit(&form), Err(CommitError::NameRequired));
    }

    #[test]
    fn test_invalid_quantity_names_the_product() {
        let form = form_with_rows(&[("Pen", "zero", "10.00")]);
        assert_eq!(
            commit(&form),
            Err(CommitError::InvalidQuantity {
                product: "Pen".to_string()
            })
        );

        let fractional = form_with_rows(&[("Pen", "2.5", "10.00")]);
        assert!(matches!(
            commit(&fractional),
            Err(CommitError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_invalid_price_names_the_product() {
        let form = form_with_rows(&[("Pen", "3", "")]);
        assert_eq!(
            commit(&form),
            Err(CommitError::InvalidPrice {
                product: "Pen".to_string()
            })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Second row's quantity is also broken, but the first row's
        // price fails first and is the only error surfaced.
        let form = form_with_rows(&[("Pen", "3", "oops"), ("Book", "bad", "5")]);
        assert_eq!(
            commit(&form),
            Err(CommitError::InvalidPrice {
                product: "Pen".to_string()
            })
        );
    }

    #[test]
    fn test_name_checked_before_quantity() {
        let form = form_with_rows(&[("", "bad", "worse")]);
        assert_eq!(commit(&form), Err(CommitError::NameRequired));
    }

    #[test]
    fn test_ids_are_unique_within_a_batch() {
        let form = form_with_rows(&[("Pen", "1", "1"), ("Pen", "1", "1"), ("Pen", "1", "1")]);
        let batch = commit(&form).unwrap();

        let mut ids: Vec<&str> = batch.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_date_is_frozen_from_the_clock() {
        use chrono::TimeZone;

        let now = Local.with_ymd_and_hms(2025, 8, 7, 14, 30, 15).unwrap();
        let form = form_with_rows(&[("Pen", "3", "10.00")]);
        let batch = commit_at(&form, now).unwrap();

        assert_eq!(batch[0].date, "2025-08-07 14:30:15");
        assert!(batch[0].id.starts_with("250807143015-"));
    }
}
