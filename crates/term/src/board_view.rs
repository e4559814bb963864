//! Board view with spreadsheet-style coordinates
//!
//! Columns are lettered `A..Z, AA, AB, ...` and rows numbered from 0, so a
//! cell reads like `C7`. Each cell shows `.` when empty, `X` for an obstacle,
//! the bonus symbol for an uncaptured bonus and the owner's digit for
//! territory.

use std::fmt::Write;

use crate::core::BoardSnapshot;
use crate::types::{CellMark, NO_OWNER};

/// Letters for zero-based column `index`
///
/// ```
/// use tile_claim_term::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(25), "Z");
/// assert_eq!(column_label(26), "AA");
/// ```
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Zero-based column for a letter label, case-insensitive
///
/// Whitespace is ignored; anything else outside `A..Z` yields `None`.
pub fn parse_column(label: &str) -> Option<usize> {
    let mut value = 0usize;
    let mut any = false;
    for c in label.chars().filter(|c| !c.is_whitespace()) {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value.checked_mul(26)?.checked_add(usize::from(c as u8 - b'A') + 1)?;
        any = true;
    }
    any.then(|| value - 1)
}

fn cell_char(snapshot: &BoardSnapshot, x: usize, y: usize) -> char {
    if let Some(kind) = snapshot.bonus_at(x, y) {
        return kind.symbol();
    }
    match snapshot.mark(x, y) {
        Some(CellMark::Territory) => match snapshot.owner(x, y) {
            Some(owner) if owner != NO_OWNER => {
                char::from_digit(u32::from(owner), 36).unwrap_or(CellMark::Territory.as_char())
            }
            _ => CellMark::Territory.as_char(),
        },
        Some(mark) => mark.as_char(),
        None => ' ',
    }
}

/// The whole board, one text row per board row
pub fn draw_board(snapshot: &BoardSnapshot) -> String {
    let width = snapshot.width();
    let label_w = column_label(width.saturating_sub(1)).len();
    let row_w = snapshot.height().saturating_sub(1).to_string().len();

    let mut out = String::new();
    let _ = write!(out, "{:row_w$}", "");
    for x in 0..width {
        let _ = write!(out, " {:>label_w$}", column_label(x));
    }
    out.push('\n');

    for y in 0..snapshot.height() {
        let _ = write!(out, "{y:>row_w$}");
        for x in 0..width {
            let _ = write!(out, " {:>label_w$}", cell_char(snapshot, x, y));
        }
        out.push('\n');
    }
    out
}
