//! Coordinate label generation and parsing.
//!
//! Rows and columns are 0-indexed here; the produced labels are 1-indexed
//! (or A-indexed) as displayed to users. Custom-schema labels are opaque
//! strings supplied externally: they are never generated and never parsed.

use labvault_core::types::Coordinate;
use labvault_core::{AppError, AppResult};
use labvault_entity::storage_unit::LabelSchema;

/// Highest row index expressible with a single letter.
const MAX_ALPHA_ROW: u32 = 25;

/// Produce the display label for a grid position.
///
/// Alpha-numeric grids label `(0, 0)` as `A1`; numeric grids label it
/// `1-1`. Alpha-numeric rows past `Z` and custom schemas cannot be
/// generated and yield a `Validation` error.
pub fn slot_label(row: u32, col: u32, schema: LabelSchema) -> AppResult<Coordinate> {
    match schema {
        LabelSchema::AlphaNumeric => {
            if row > MAX_ALPHA_ROW {
                return Err(AppError::validation(format!(
                    "row {row} exceeds single-letter labeling (max {MAX_ALPHA_ROW})"
                )));
            }
            let letter = char::from(b'A' + row as u8);
            Ok(Coordinate::new(format!("{letter}{}", col + 1)))
        }
        LabelSchema::Numeric => Ok(Coordinate::new(format!("{}-{}", row + 1, col + 1))),
        LabelSchema::Custom => Err(AppError::validation(
            "custom-schema coordinates are supplied externally, not generated",
        )),
    }
}

/// Parse a label back into its 0-indexed `(row, col)` position.
///
/// Inverse of [`slot_label`] for the generated schemas. Returns `None`
/// for malformed labels and for the custom schema, whose coordinates
/// stay opaque.
pub fn parse_label(coordinate: &Coordinate, schema: LabelSchema) -> Option<(u32, u32)> {
    let s = coordinate.as_str();
    match schema {
        LabelSchema::AlphaNumeric => {
            let mut chars = s.chars();
            let letter = chars.next()?;
            if !letter.is_ascii_uppercase() {
                return None;
            }
            let row = letter as u32 - 'A' as u32;
            let col: u32 = chars.as_str().parse().ok()?;
            if col == 0 {
                return None;
            }
            Some((row, col - 1))
        }
        LabelSchema::Numeric => {
            let (row_s, col_s) = s.split_once('-')?;
            let row: u32 = row_s.parse().ok()?;
            let col: u32 = col_s.parse().ok()?;
            if row == 0 || col == 0 {
                return None;
            }
            Some((row - 1, col - 1))
        }
        LabelSchema::Custom => None,
    }
}

/// Whether a label addresses a position inside the given grid bounds.
///
/// Custom-schema labels cannot be bounds-checked and are accepted as-is.
pub fn in_bounds(coordinate: &Coordinate, rows: u32, cols: u32, schema: LabelSchema) -> bool {
    match parse_label(coordinate, schema) {
        Some((row, col)) => row < rows && col < cols,
        None => schema == LabelSchema::Custom,
    }
}
