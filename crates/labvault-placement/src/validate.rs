//! Container creation validation.

use labvault_core::config::grid::GridConfig;
use labvault_core::{AppError, AppResult};
use labvault_entity::storage_unit::{CreateStorageUnit, LabelSchema};

use crate::labeler::in_bounds;

/// Single-letter row labels cap alpha-numeric grids at 26 rows.
const MAX_ALPHA_ROWS: u32 = 26;

/// Validate a new container before it is handed to the write layer.
///
/// Checks naming, grid dimensions against the configured maxima, the
/// alpha-numeric row cap, and that every disabled slot addresses a
/// position inside the grid.
pub fn validate_create_unit(create: &CreateStorageUnit, limits: &GridConfig) -> AppResult<()> {
    if create.name.trim().is_empty() {
        return Err(AppError::validation("storage unit name is required"));
    }
    if create.storage_id.trim().is_empty() {
        return Err(AppError::validation("storage id label is required"));
    }

    let Some(grid) = &create.grid else {
        return Ok(());
    };

    if grid.rows == 0 || grid.cols == 0 {
        return Err(AppError::validation("grid dimensions must be at least 1x1"));
    }
    if grid.rows > limits.max_rows || grid.cols > limits.max_cols {
        return Err(AppError::validation(format!(
            "grid {}x{} exceeds the configured maximum {}x{}",
            grid.rows, grid.cols, limits.max_rows, limits.max_cols
        )));
    }
    if grid.label_schema == LabelSchema::AlphaNumeric && grid.rows > MAX_ALPHA_ROWS {
        return Err(AppError::validation(format!(
            "alpha-numeric grids support at most {MAX_ALPHA_ROWS} rows"
        )));
    }

    for slot in &grid.disabled_slots {
        if !in_bounds(slot, grid.rows, grid.cols, grid.label_schema) {
            return Err(AppError::validation(format!(
                "disabled slot {slot} is outside the {}x{} grid",
                grid.rows, grid.cols
            )));
        }
    }

    Ok(())
}
