//! # Receipt Document Model
//!
//! Builds the printable receipt for a selection of sales.
//!
//! Content generation is split from presentation: the selection is
//! first resolved to records and folded into a structured [`Receipt`]
//! (title, line items, grand total, print timestamp), and only then
//! rendered into a self-contained HTML document. Styling stays inside
//! the renderer; nothing upstream knows about markup.
//!
//! ## Ordering
//! The ledger displays newest-first, but receipts list the selected
//! records in original chronological order, oldest first.

use chrono::{DateTime, Local};

use crate::money::Money;
use crate::selection::Selection;
use crate::types::Sale;

/// Format of the "printed at" stamp on the document.
const PRINTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Selection Resolution
// =============================================================================

/// Resolves a selection against the ledger, oldest-first.
///
/// `records` is the store's newest-first sequence; walking it in
/// reverse restores chronological order. Ids that no longer match a
/// record resolve to nothing.
pub fn resolve_selection<'a>(records: &'a [Sale], selection: &Selection) -> Vec<&'a Sale> {
    records
        .iter()
        .rev()
        .filter(|sale| selection.contains(&sale.id))
        .collect()
}

// =============================================================================
// Receipt
// =============================================================================

/// One line item on the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// The structured printable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Heading, usually the store name.
    pub title: String,

    /// When the document was generated.
    pub printed_at: String,

    /// Selected sales, oldest first.
    pub lines: Vec<ReceiptLine>,

    /// Combined total of every line.
    pub grand_total: Money,
}

impl Receipt {
    /// Builds the document model from already-resolved records.
    ///
    /// `sales` must be in the order the receipt should list them
    /// (see [`resolve_selection`]).
    pub fn build(title: &str, sales: &[&Sale], printed_at: DateTime<Local>) -> Self {
        let lines: Vec<ReceiptLine> = sales
            .iter()
            .map(|sale| ReceiptLine {
                product_name: sale.product_name.clone(),
                quantity: sale.quantity,
                unit_price: sale.unit_price(),
                line_total: sale.total(),
            })
            .collect();

        let grand_total = lines.iter().map(|l| l.line_total).sum();

        Receipt {
            title: title.to_string(),
            printed_at: printed_at.format(PRINTED_AT_FORMAT).to_string(),
            lines,
            grand_total,
        }
    }

    /// Renders the document as self-contained printable HTML.
    ///
    /// The page carries its own minimal styling and asks the host
    /// viewer for its print dialog on load; product names are escaped.
    pub fn to_html(&self) -> String {
        let mut rows = String::new();
        for line in &self.lines {
            rows.push_str(&format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&line.product_name),
                line.quantity,
                line.unit_price,
                line.line_total,
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2em; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border-bottom: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
    tfoot td {{ font-weight: bold; border-bottom: none; }}
    .printed-at {{ color: #555; }}
  </style>
</head>
<body onload="window.print()">
  <h1>{title}</h1>
  <p class="printed-at">Printed {printed_at}</p>
  <table>
    <thead>
      <tr><th>Product</th><th>Qty</th><th>Unit Price</th><th>Total</th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
    <tfoot>
      <tr><td colspan="3">Grand Total</td><td>{grand_total}</td></tr>
    </tfoot>
  </table>
</body>
</html>
"#,
            title = escape_html(&self.title),
            printed_at = self.printed_at,
            rows = rows,
            grand_total = self.grand_total,
        )
    }
}

/// Minimal HTML escaping for user-entered text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sale(id: &str, name: &str, qty: i64, price_kobo: i64) -> Sale {
        Sale {
            id: id.to_string(),
            product_name: name.to_string(),
            quantity: qty,
            sell_price: Money::from_kobo(price_kobo),
            total_amount: Money::from_kobo(price_kobo * qty),
            date: "2025-08-07 10:00:00".to_string(),
        }
    }

    fn printed_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 7, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_resolution_is_oldest_first() {
        // Store order is newest-first: c was recorded last.
        let records = vec![
            sale("c", "Crayons", 1, 300),
            sale("b", "Book", 1, 200),
            sale("a", "Pen", 1, 100),
        ];
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("c");

        let resolved = resolve_selection(&records, &selection);
        let ids: Vec<&str> = resolved.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_stale_ids_resolve_to_nothing() {
        let records = vec![sale("a", "Pen", 1, 100)];
        let mut selection = Selection::new();
        selection.toggle("gone");

        assert!(resolve_selection(&records, &selection).is_empty());
    }

    #[test]
    fn test_build_computes_grand_total() {
        let a = sale("a", "Pen", 3, 1000);
        let b = sale("b", "Book", 1, 2550);
        let receipt = Receipt::build("My Shop", &[&a, &b], printed_at());

        assert_eq!(receipt.title, "My Shop");
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.grand_total, Money::from_kobo(5550));
        assert_eq!(receipt.printed_at, "2025-08-07 18:00:00");
    }

    #[test]
    fn test_html_contains_lines_and_total() {
        let a = sale("a", "Pen", 3, 1000);
        let receipt = Receipt::build("My Shop", &[&a], printed_at());
        let html = receipt.to_html();

        assert!(html.contains("<h1>My Shop</h1>"));
        assert!(html.contains("<td>Pen</td>"));
        assert!(html.contains("<td>₦10.00</td>"));
        assert!(html.contains("<td>₦30.00</td>"));
        assert!(html.contains("Grand Total"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_html_escapes_product_names() {
        let a = sale("a", "<script>alert('x')</script>", 1, 100);
        let receipt = Receipt::build("Shop & Sons", &[&a], printed_at());
        let html = receipt.to_html();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Shop &amp; Sons"));
    }
}
