//! Storage unit entity model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labvault_core::types::{Coordinate, StorageUnitId};

use super::grid::GridSpec;

/// Physical kind of a storage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageUnitKind {
    /// Ultra-low or standard freezer.
    Freezer,
    /// Refrigerated chiller.
    Chiller,
    /// Room-temperature cabinet.
    Cabinet,
    /// Shelf inside a larger unit.
    Shelf,
    /// Rack holding boxes.
    Rack,
    /// Slotted box holding tubes.
    Box,
    /// Anything that does not fit the fixed kinds.
    Other,
}

/// Operational status of a storage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageUnitStatus {
    /// Unit is in service.
    Active,
    /// Unit is taken out of service (contents being relocated).
    Retired,
    /// Unit is flagged for maintenance.
    Maintenance,
}

/// A node in the physical storage containment forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUnit {
    /// Unique storage unit identifier.
    pub id: StorageUnitId,
    /// Human-readable label (e.g. `FRZ-1`).
    pub storage_id: String,
    /// Display name.
    pub name: String,
    /// Physical kind.
    pub kind: StorageUnitKind,
    /// Operational status.
    pub status: StorageUnitStatus,
    /// Parent unit (None for root units).
    pub parent_storage_id: Option<StorageUnitId>,
    /// 2D slot layout, when the unit is a slotted grid.
    pub grid: Option<GridSpec>,
    /// Scalar slot capacity for non-grid units (None = unbounded).
    pub capacity_slots: Option<u32>,
    /// Legacy denormalized occupancy map, coordinate to occupant label.
    ///
    /// Superseded by live sample/extract positions but still merged for
    /// backward compatibility; entries carry no type guarantee.
    #[serde(default)]
    pub occupied_slots: HashMap<Coordinate, String>,
    /// When the unit was created.
    pub created_at: DateTime<Utc>,
    /// When the unit was last updated.
    pub updated_at: DateTime<Utc>,
}

impl StorageUnit {
    /// Check if this is a root unit (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_storage_id.is_none()
    }

    /// Check if the unit has a 2D slot grid.
    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Check if the unit is in service.
    pub fn is_active(&self) -> bool {
        self.status == StorageUnitStatus::Active
    }
}

/// Data required to create a new storage unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStorageUnit {
    /// Human-readable label.
    pub storage_id: String,
    /// Display name.
    pub name: String,
    /// Physical kind.
    pub kind: StorageUnitKind,
    /// Parent unit (None for root).
    pub parent_storage_id: Option<StorageUnitId>,
    /// 2D slot layout.
    pub grid: Option<GridSpec>,
    /// Scalar slot capacity for non-grid units.
    pub capacity_slots: Option<u32>,
}
