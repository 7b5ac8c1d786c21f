//! Deterministic first-free slot assignment.

use std::collections::HashSet;

use tracing::debug;

use labvault_core::types::Coordinate;
use labvault_core::{AppError, AppResult};
use labvault_entity::storage_unit::GridSpec;

use crate::labeler::slot_label;

/// Find the first free, enabled coordinate in row-major order.
///
/// Scans top-left first: row 0 across all columns, then row 1, and so
/// on. Disabled and occupied slots are skipped. The scan is a pure
/// function of its inputs, so retrying with an identical occupancy
/// snapshot always yields the same coordinate.
///
/// Returns a `NoCapacity` error when every coordinate is disabled or
/// occupied.
pub fn auto_assign(grid: &GridSpec, occupied: &HashSet<Coordinate>) -> AppResult<Coordinate> {
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let coordinate = slot_label(row, col, grid.label_schema)?;
            if grid.is_disabled(&coordinate) || occupied.contains(&coordinate) {
                continue;
            }
            debug!(slot = %coordinate, "auto-assigned first free slot");
            return Ok(coordinate);
        }
    }
    Err(AppError::no_capacity("all slots occupied or disabled"))
}

/// Iterate every free, enabled coordinate in row-major order.
///
/// Same scan as [`auto_assign`]; used by batch fill to hand out several
/// slots in one pass. Label-generation failures (e.g. an oversized
/// alpha-numeric grid that slipped past validation) end the iteration.
pub fn free_slots<'a>(
    grid: &'a GridSpec,
    occupied: &'a HashSet<Coordinate>,
) -> impl Iterator<Item = Coordinate> + 'a {
    (0..grid.rows)
        .flat_map(move |row| (0..grid.cols).map(move |col| (row, col)))
        .map_while(move |(row, col)| slot_label(row, col, grid.label_schema).ok())
        .filter(move |coordinate| !grid.is_disabled(coordinate) && !occupied.contains(coordinate))
}
