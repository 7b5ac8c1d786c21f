//! Sample entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labvault_core::types::{Coordinate, SampleId, StorageUnitId};

/// Lifecycle status of a registered sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleStatus {
    /// Registered and available.
    Active,
    /// Fully consumed by experiments or extraction.
    Depleted,
    /// Shipped to an external collaborator.
    Shipped,
    /// Discarded.
    Disposed,
}

/// A registered laboratory sample.
///
/// Samples are one of the two live occupancy sources for storage grids:
/// a sample with both a storage location and a position claims that slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Unique sample identifier.
    pub id: SampleId,
    /// Human-readable accession label (e.g. `SMP-0042`).
    pub sample_id: String,
    /// Display name.
    pub name: String,
    /// Source organism or species, if recorded.
    pub organism: Option<String>,
    /// Sample material type (tissue, blood, soil, ...).
    pub sample_type: Option<String>,
    /// Lifecycle status.
    pub status: SampleStatus,
    /// The storage unit this sample is placed in, if any.
    pub storage_location_id: Option<StorageUnitId>,
    /// The grid slot within the storage unit, if any.
    pub position: Option<Coordinate>,
    /// When the sample was collected.
    pub collected_at: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Sample {
    /// Whether the sample claims a concrete grid slot.
    pub fn is_placed(&self) -> bool {
        self.storage_location_id.is_some() && self.position.is_some()
    }
}
