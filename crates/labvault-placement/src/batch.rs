//! Provisional placement coordination for multi-row batches.
//!
//! During an import-resolve or bulk-move step, rows claim slots that are
//! not yet persisted anywhere. The coordinator tracks those claims per
//! container so auto-assign and conflict detection see slots taken by
//! *other rows of the same batch*, not just committed occupants. All
//! state here is discarded if the user abandons the batch; nothing is
//! written until an explicit commit.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use labvault_core::types::{Coordinate, StorageUnitId};
use labvault_core::{AppError, AppResult};
use labvault_entity::storage_unit::StorageUnit;

use crate::allocate::auto_assign;
use crate::labeler::in_bounds;
use crate::occupancy::OccupancyMap;

/// One unsaved row in a batch placement operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRow {
    /// Display label for the record being placed.
    pub label: String,
    /// Target container, if the row has one assigned.
    pub target: Option<StorageUnitId>,
    /// Claimed slot within the target, if any.
    pub position: Option<Coordinate>,
}

impl BatchRow {
    /// A row with a target container but no slot yet.
    pub fn unplaced(label: impl Into<String>, target: StorageUnitId) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
            position: None,
        }
    }
}

/// Why a drag-and-drop placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The target slot holds a committed occupant.
    AlreadyOccupied,
    /// The target slot is permanently disabled (or outside the grid).
    Disabled,
}

/// Outcome of a drop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum DropVerdict {
    /// The row now claims the target slot.
    Accept,
    /// The drop was refused; the row keeps its previous claim.
    Reject {
        /// Why the slot cannot be taken.
        reason: RejectReason,
    },
}

/// Tracks provisional slot claims across the rows of one unsaved batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchCoordinator {
    rows: Vec<BatchRow>,
}

impl BatchCoordinator {
    /// Create a coordinator over the given rows.
    pub fn new(rows: Vec<BatchRow>) -> Self {
        Self { rows }
    }

    /// The batch rows in order.
    pub fn rows(&self) -> &[BatchRow] {
        &self.rows
    }

    /// A single row by index.
    pub fn row(&self, index: usize) -> Option<&BatchRow> {
        self.rows.get(index)
    }

    /// Change a row's target container, clearing its slot claim.
    pub fn retarget(&mut self, index: usize, target: Option<StorageUnitId>) -> AppResult<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("batch row {index}")))?;
        row.target = target;
        row.position = None;
        Ok(())
    }

    /// Slots claimed in `storage_id` by rows other than `exclude_row`.
    ///
    /// Excluding the row currently being edited lets it keep or change
    /// its own slot without self-conflicting.
    pub fn batch_occupied_slots(
        &self,
        storage_id: StorageUnitId,
        exclude_row: Option<usize>,
    ) -> HashSet<Coordinate> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, row)| {
                Some(*index) != exclude_row && row.target == Some(storage_id)
            })
            .filter_map(|(_, row)| row.position.clone())
            .collect()
    }

    /// Auto-assign a slot to every row that has a container but no slot.
    ///
    /// For each such row the allocator sees the union of the container's
    /// committed occupancy and the claims accumulated so far in this
    /// pass, so two rows filling the same container never receive the
    /// same coordinate. Failures are per-row: a row whose container is
    /// unknown, gridless, or full is reported and skipped without
    /// aborting the rest of the pass.
    pub fn auto_assign_all(
        &mut self,
        units: &HashMap<StorageUnitId, StorageUnit>,
        committed: &HashMap<StorageUnitId, OccupancyMap>,
    ) -> Vec<(usize, AppResult<Coordinate>)> {
        // Start the accumulator from every existing claim in the batch.
        let mut claimed: HashMap<StorageUnitId, HashSet<Coordinate>> = HashMap::new();
        for row in &self.rows {
            if let (Some(target), Some(position)) = (row.target, &row.position) {
                claimed.entry(target).or_default().insert(position.clone());
            }
        }

        let mut results = Vec::new();
        for index in 0..self.rows.len() {
            let Some(target) = self.rows[index].target else {
                continue;
            };
            if self.rows[index].position.is_some() {
                continue;
            }

            let outcome = Self::assign_one(units, committed, &claimed, target);
            match &outcome {
                Ok(coordinate) => {
                    claimed
                        .entry(target)
                        .or_default()
                        .insert(coordinate.clone());
                    self.rows[index].position = Some(coordinate.clone());
                    debug!(row = index, slot = %coordinate, "batch auto-assigned");
                }
                Err(err) => {
                    debug!(row = index, error = %err, "batch auto-assign failed");
                }
            }
            results.push((index, outcome));
        }
        results
    }

    fn assign_one(
        units: &HashMap<StorageUnitId, StorageUnit>,
        committed: &HashMap<StorageUnitId, OccupancyMap>,
        claimed: &HashMap<StorageUnitId, HashSet<Coordinate>>,
        target: StorageUnitId,
    ) -> AppResult<Coordinate> {
        let unit = units
            .get(&target)
            .ok_or_else(|| AppError::not_found(format!("storage unit {target}")))?;
        let grid = unit
            .grid
            .as_ref()
            .ok_or_else(|| AppError::validation(format!("'{}' has no slot grid", unit.name)))?;

        let mut occupied: HashSet<Coordinate> = committed
            .get(&target)
            .map(|map| map.occupied_coordinates())
            .unwrap_or_default();
        if let Some(claims) = claimed.get(&target) {
            occupied.extend(claims.iter().cloned());
        }
        auto_assign(grid, &occupied)
    }

    /// Place a row on a specific slot by direct user action (drag/drop).
    ///
    /// Committed occupants and disabled slots reject the drop. A slot
    /// claimed only by another batch row does *not* reject: the user is
    /// actively resolving the batch, and the surviving conflict shows up
    /// in [`conflicts`](Self::conflicts).
    pub fn handle_drop(
        &mut self,
        row_index: usize,
        unit: &StorageUnit,
        committed: &OccupancyMap,
        coordinate: Coordinate,
    ) -> AppResult<DropVerdict> {
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or_else(|| AppError::not_found(format!("batch row {row_index}")))?;
        let grid = unit
            .grid
            .as_ref()
            .ok_or_else(|| AppError::validation(format!("'{}' has no slot grid", unit.name)))?;

        if grid.is_disabled(&coordinate)
            || !in_bounds(&coordinate, grid.rows, grid.cols, grid.label_schema)
        {
            return Ok(DropVerdict::Reject {
                reason: RejectReason::Disabled,
            });
        }
        if committed.is_occupied(&coordinate) {
            return Ok(DropVerdict::Reject {
                reason: RejectReason::AlreadyOccupied,
            });
        }

        row.target = Some(unit.id);
        row.position = Some(coordinate);
        Ok(DropVerdict::Accept)
    }

    /// Rows that currently claim the same slot in the same container.
    ///
    /// Returned as `(container, coordinate, row indexes)` triples with at
    /// least two rows each, for the resolve-step UI to highlight.
    pub fn conflicts(&self) -> Vec<(StorageUnitId, Coordinate, Vec<usize>)> {
        let mut by_slot: HashMap<(StorageUnitId, Coordinate), Vec<usize>> = HashMap::new();
        for (index, row) in self.rows.iter().enumerate() {
            if let (Some(target), Some(position)) = (row.target, &row.position) {
                by_slot
                    .entry((target, position.clone()))
                    .or_default()
                    .push(index);
            }
        }
        let mut conflicts: Vec<_> = by_slot
            .into_iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|((unit, coordinate), rows)| (unit, coordinate, rows))
            .collect();
        conflicts.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
        conflicts
    }
}
