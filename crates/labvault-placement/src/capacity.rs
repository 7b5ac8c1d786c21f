//! Capacity snapshots and ancestor-path aggregation.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use labvault_core::types::StorageUnitId;
use labvault_entity::storage_unit::{CapacitySnapshot, StoragePath, StorageUnit};

use crate::occupancy::OccupancyMap;

/// Derive the slot counts for one container.
///
/// Grid units count `rows * cols`; non-grid units fall back to their
/// scalar `capacity_slots` (0 when unbounded). All subtractions clamp
/// at zero so inconsistent data can never produce negative counts.
pub fn capacity_snapshot(unit: &StorageUnit, occupancy: &OccupancyMap) -> CapacitySnapshot {
    let (theoretical, effective) = match &unit.grid {
        Some(grid) => (grid.theoretical_slots(), grid.effective_slots()),
        None => {
            let scalar = unit.capacity_slots.unwrap_or(0);
            (scalar, scalar)
        }
    };
    CapacitySnapshot {
        theoretical,
        effective,
        available: effective.saturating_sub(occupancy.len() as u32),
    }
}

/// Walk the parent links of a unit and collect its ancestor chain.
///
/// The walk stops at a unit with no parent, or at a parent id missing
/// from `nodes` (a dangling link; the last reachable unit is treated as
/// a synthetic root). A revisited id or more steps than `nodes` holds
/// means the parent links form a cycle: the walk stops there and the
/// returned path is flagged truncated instead of looping forever.
pub fn ancestor_path(
    unit: &StorageUnit,
    nodes: &HashMap<StorageUnitId, StorageUnit>,
) -> StoragePath {
    let mut chain: Vec<(StorageUnitId, String)> = vec![(unit.id, unit.name.clone())];
    let mut visited: HashSet<StorageUnitId> = HashSet::from([unit.id]);
    let mut truncated = false;

    let mut current_parent = unit.parent_storage_id;
    let bound = nodes.len() + 1;
    let mut steps = 0;

    while let Some(parent_id) = current_parent {
        steps += 1;
        if steps > bound || !visited.insert(parent_id) {
            warn!(
                unit = %unit.storage_id,
                parent = %parent_id,
                "cycle in parent links, truncating ancestor path"
            );
            truncated = true;
            break;
        }
        let Some(parent) = nodes.get(&parent_id) else {
            // Dangling parent reference: treat the chain so far as rooted.
            break;
        };
        chain.push((parent.id, parent.name.clone()));
        current_parent = parent.parent_storage_id;
    }

    chain.reverse();
    let (ids, names) = chain.into_iter().unzip();
    StoragePath {
        ids,
        names,
        truncated,
    }
}
