//! Occupancy reconciliation across legacy and live sources.
//!
//! A container's occupancy at any instant is the union of its legacy
//! denormalized `occupied_slots` map and the live samples and DNA
//! extracts positioned in it, keyed by normalized coordinate. Live,
//! typed entries always win over legacy `unknown` entries at the same
//! key.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map;

use tracing::trace;

use labvault_core::types::Coordinate;
use labvault_entity::occupant::Occupant;
use labvault_entity::sample::Sample;
use labvault_entity::storage_unit::StorageUnit;
use labvault_entity::DnaExtract;

/// Reconciled coordinate-to-occupant map for one container.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OccupancyMap {
    slots: HashMap<Coordinate, Occupant>,
}

impl OccupancyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupant at a coordinate, if any.
    pub fn get(&self, coordinate: &Coordinate) -> Option<&Occupant> {
        self.slots.get(coordinate)
    }

    /// Whether the coordinate holds any occupant.
    pub fn is_occupied(&self, coordinate: &Coordinate) -> bool {
        self.slots.contains_key(coordinate)
    }

    /// Number of occupied coordinates.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no coordinate is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert an occupant, replacing whatever held the coordinate.
    pub fn insert(&mut self, coordinate: Coordinate, occupant: Occupant) {
        self.slots.insert(coordinate, occupant);
    }

    /// Insert only if the coordinate is currently free.
    ///
    /// Used for caller-supplied augmentation that must not override a
    /// known, typed occupant.
    pub fn insert_if_absent(&mut self, coordinate: Coordinate, occupant: Occupant) {
        self.slots.entry(coordinate).or_insert(occupant);
    }

    /// The set of occupied coordinates.
    pub fn occupied_coordinates(&self) -> HashSet<Coordinate> {
        self.slots.keys().cloned().collect()
    }

    /// Iterate over `(coordinate, occupant)` pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, Coordinate, Occupant> {
        self.slots.iter()
    }
}

/// Merge a container's occupancy sources into one coherent map.
///
/// Insertion order fixes the precedence: legacy entries land first as
/// untyped, live samples and then live extracts overwrite them, and the
/// caller-supplied `additional` coordinates fill remaining gaps without
/// overriding anything known. There is no removal step: a caller that
/// needs a slot to read as free (e.g. the subject's own slot during a
/// move) must exclude that record from the inputs.
pub fn reconcile_occupancy(
    unit: &StorageUnit,
    samples: &[Sample],
    extracts: &[DnaExtract],
    additional: &HashSet<Coordinate>,
) -> OccupancyMap {
    let mut map = OccupancyMap::new();

    for (coordinate, label) in &unit.occupied_slots {
        map.insert(
            coordinate.clone(),
            Occupant::Unknown {
                label: label.clone(),
            },
        );
    }

    for sample in samples {
        if sample.storage_location_id != Some(unit.id) {
            continue;
        }
        if let Some(position) = &sample.position {
            map.insert(
                position.clone(),
                Occupant::Sample {
                    id: sample.id,
                    label: sample.sample_id.clone(),
                },
            );
        }
    }

    for extract in extracts {
        if extract.storage_location_id != Some(unit.id) {
            continue;
        }
        if let Some(position) = &extract.position {
            map.insert(
                position.clone(),
                Occupant::DnaExtract {
                    id: extract.id,
                    label: extract.extract_id.clone(),
                },
            );
        }
    }

    for coordinate in additional {
        map.insert_if_absent(
            coordinate.clone(),
            Occupant::Unknown {
                label: String::new(),
            },
        );
    }

    trace!(
        unit = %unit.storage_id,
        occupied = map.len(),
        "reconciled occupancy"
    );
    map
}
