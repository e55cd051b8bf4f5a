//! # Interactive Session
//!
//! The line-oriented surface the user drives the ledger from. One
//! command per line, each running to completion before the next line is
//! read; there is no background work anywhere in the application.
//!
//! ## Commands
//! ```text
//! rows                       show the entry form (with any error)
//! add                        append a blank row
//! del <row>                  remove a row (the last one stays)
//! set <row> <field> <value>  edit a field: name | qty | price
//! save                       record the draft as sales
//! list                       show the ledger, newest first
//! summary                    running totals
//! mark <sale>                toggle a sale for the next receipt
//! all / none                 select every sale / clear the selection
//! print                      dispatch a receipt for the selection
//! export                     dump the ledger as JSON
//! help                       this text
//! quit                       end the session
//! ```
//!
//! The loop is generic over its reader and writer so a whole scripted
//! session can run under test.

use std::io::{self, BufRead, Write};

use salebook_core::{DraftField, SelectionState};

use crate::commands::{draft, receipt, sale, selection};
use crate::error::{AppError, ErrorCode};
use crate::print::PrintSurface;
use crate::state::AppState;

/// Runs the session until `quit` or end of input.
pub fn run_session<R, W>(
    state: &mut AppState,
    surface: &mut dyn PrintSurface,
    mut input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Salebook — {}. Type 'help' for commands.",
        state.config.store_name
    )?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let Some((&command, args)) = tokens.split_first() else {
            continue;
        };

        match command {
            "help" => write_help(out)?,
            "rows" => write_draft(state, out)?,
            "add" => {
                let position = draft::add_row(state);
                writeln!(out, "Added row {position}.")?;
            }
            "del" => match parse_position(args.first()) {
                Ok(position) => report(draft::remove_row(state, position), out, |_| {
                    format!("Removed row {position}.")
                })?,
                Err(e) => write_error(&e, out)?,
            },
            "set" => match parse_set(args) {
                Ok((position, field, value)) => {
                    report(draft::update_field(state, position, field, &value), out, |_| {
                        format!("Updated row {position}.")
                    })?
                }
                Err(e) => write_error(&e, out)?,
            },
            "save" => report(sale::record_sales(state), out, |outcome| {
                format!(
                    "Recorded {} sale(s) totalling {}.",
                    outcome.recorded, outcome.batch_total
                )
            })?,
            "list" => write_ledger(state, out)?,
            "summary" => {
                let summary = sale::ledger_summary(state);
                writeln!(
                    out,
                    "{} sale(s) recorded · total revenue {}",
                    summary.total_sales, summary.total_revenue
                )?;
            }
            "mark" => match parse_position(args.first()) {
                Ok(position) => report(selection::toggle(state, position), out, |(_, selected)| {
                    if *selected {
                        format!("Sale {position} marked for printing.")
                    } else {
                        format!("Sale {position} unmarked.")
                    }
                })?,
                Err(e) => write_error(&e, out)?,
            },
            "all" => {
                selection::select_all(state);
                writeln!(out, "All {} sale(s) marked.", state.selection.len())?;
            }
            "none" => {
                selection::clear(state);
                writeln!(out, "Selection cleared.")?;
            }
            "print" => report(receipt::print_receipt(state, surface), out, |outcome| {
                format!(
                    "Printed {} item(s) totalling {}. {}",
                    outcome.printed, outcome.total, outcome.destination
                )
            })?,
            "export" => report(sale::export_ledger(state), out, |json| json.clone())?,
            "quit" | "exit" => break,
            other => {
                writeln!(out, "Unknown command '{other}'. Type 'help' for the list.")?;
            }
        }
    }

    Ok(())
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_position(arg: Option<&&str>) -> Result<usize, AppError> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| AppError::validation("Expected a row number"))
}

fn parse_set(args: &[&str]) -> Result<(usize, DraftField, String), AppError> {
    let position = parse_position(args.first())?;

    let field_name = args
        .get(1)
        .ok_or_else(|| AppError::validation("Expected a field: name, qty or price"))?;
    let field = DraftField::parse(field_name)
        .ok_or_else(|| AppError::validation("Expected a field: name, qty or price"))?;

    Ok((position, field, args[2..].join(" ")))
}

// =============================================================================
// Rendering
// =============================================================================

/// Prints a handler outcome, or its error.
fn report<T, W, F>(result: Result<T, AppError>, out: &mut W, describe: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&T) -> String,
{
    match result {
        Ok(value) => writeln!(out, "{}", describe(&value)),
        Err(e) => write_error(&e, out),
    }
}

fn write_error<W: Write>(err: &AppError, out: &mut W) -> io::Result<()> {
    // Print-surface trouble is a warning: the ledger is fine, only the
    // receipt did not reach a viewer.
    let prefix = match err.code {
        ErrorCode::PrintSurface => "Warning",
        _ => "Error",
    };
    writeln!(out, "{prefix}: {}", err.message)
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  rows                       show the entry form")?;
    writeln!(out, "  add                        append a blank row")?;
    writeln!(out, "  del <row>                  remove a row")?;
    writeln!(out, "  set <row> <field> <value>  edit name | qty | price")?;
    writeln!(out, "  save                       record the draft as sales")?;
    writeln!(out, "  list                       show the ledger, newest first")?;
    writeln!(out, "  summary                    running totals")?;
    writeln!(out, "  mark <sale>                toggle a sale for printing")?;
    writeln!(out, "  all | none                 select every sale / none")?;
    writeln!(out, "  print                      print a receipt for the selection")?;
    writeln!(out, "  export                     dump the ledger as JSON")?;
    writeln!(out, "  quit                       end the session")
}

fn write_draft<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    if let Some(error) = &state.last_error {
        writeln!(out, "! {error}")?;
    }

    writeln!(out, "  #  {:<24} {:<10} Price", "Product", "Qty")?;
    for (i, row) in state.draft.rows().iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<24} {:<10} {}",
            i + 1,
            row.product_name,
            row.quantity,
            row.sell_price
        )?;
    }
    Ok(())
}

fn write_ledger<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    if state.store.is_empty() {
        writeln!(out, "No sales recorded yet.")?;
        return Ok(());
    }

    let marker = match selection::current(state) {
        SelectionState::None => "[ ]",
        SelectionState::Partial => "[~]",
        SelectionState::All => "[x]",
    };
    writeln!(out, "{marker} All sales (newest first)")?;

    for (i, sale) in state.store.records().iter().enumerate() {
        let mark = if state.selection.contains(&sale.id) {
            "[x]"
        } else {
            "[ ]"
        };
        writeln!(
            out,
            "{:>3} {mark} {:<20} {:<24} {:>5}  {:>10}  {:>10}",
            i + 1,
            sale.date,
            sale.product_name,
            sale.quantity,
            sale.sell_price.to_string(),
            sale.total_amount.to_string(),
        )?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
