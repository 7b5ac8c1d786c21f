//! Feasibility and staleness checks ahead of persistence.
//!
//! The engine never writes; it computes what *should* be written and
//! validates it. External mutation actions consume the request types
//! here and are expected to call [`verify_still_free`] against a
//! freshly-read occupancy snapshot right before committing, so a slot
//! claimed by another actor between read and write is rejected instead
//! of silently double-occupied.

use serde::{Deserialize, Serialize};

use labvault_core::types::{Coordinate, StorageUnitId};
use labvault_core::{AppError, AppResult};
use labvault_entity::storage_unit::StorageUnit;

use crate::labeler::in_bounds;
use crate::occupancy::OccupancyMap;

/// A validated request to place a record on a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The container being written to.
    pub storage_id: StorageUnitId,
    /// The slot being claimed.
    pub coordinate: Coordinate,
}

/// A validated request to move a record between containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMove {
    /// The container the record currently sits in.
    pub source: StorageUnitId,
    /// The container the record is moving to.
    pub target: StorageUnitId,
    /// The slot being claimed in the target.
    pub coordinate: Coordinate,
}

/// Validate a direct slot placement against the committed view.
///
/// Checks grid presence, bounds, disabled slots, and committed
/// occupancy. For a move, reconcile the occupancy with the subject's
/// own record excluded so its current slot reads as free.
pub fn validate_assignment(
    unit: &StorageUnit,
    committed: &OccupancyMap,
    coordinate: Coordinate,
) -> AppResult<SlotAssignment> {
    let grid = unit
        .grid
        .as_ref()
        .ok_or_else(|| AppError::validation(format!("'{}' has no slot grid", unit.name)))?;

    if !in_bounds(&coordinate, grid.rows, grid.cols, grid.label_schema) {
        return Err(AppError::validation(format!(
            "slot {coordinate} is outside the {}x{} grid",
            grid.rows, grid.cols
        )));
    }
    if grid.is_disabled(&coordinate) {
        return Err(AppError::validation(format!("slot {coordinate} is disabled")));
    }
    if let Some(occupant) = committed.get(&coordinate) {
        return Err(AppError::slot_occupied(format!(
            "slot {coordinate} is occupied by {}",
            occupant.display_label()
        )));
    }

    Ok(SlotAssignment {
        storage_id: unit.id,
        coordinate,
    })
}

/// Optimistic-concurrency check at commit time.
///
/// `current` must be reconciled from records read as part of the commit,
/// not from the snapshot the assignment was computed against. A
/// `StaleSnapshot` error means another actor claimed the slot in the
/// meantime; the caller should recompute and re-prompt.
pub fn verify_still_free(current: &OccupancyMap, coordinate: &Coordinate) -> AppResult<()> {
    match current.get(coordinate) {
        Some(occupant) => Err(AppError::stale_snapshot(format!(
            "slot {coordinate} was claimed by {} after the snapshot was taken",
            occupant.display_label()
        ))),
        None => Ok(()),
    }
}
