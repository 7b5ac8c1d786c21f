//! DNA extract entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labvault_core::types::{Coordinate, DnaExtractId, SampleId, StorageUnitId};

/// A DNA extract derived from a registered sample.
///
/// Extracts are the second live occupancy source for storage grids,
/// independent of the sample collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaExtract {
    /// Unique extract identifier.
    pub id: DnaExtractId,
    /// Human-readable accession label (e.g. `EXT-0042`).
    pub extract_id: String,
    /// The sample this extract was derived from.
    pub source_sample_id: Option<SampleId>,
    /// Extraction kit or protocol name.
    pub extraction_method: Option<String>,
    /// Measured concentration in ng/µL.
    pub concentration_ng_ul: Option<f64>,
    /// 260/280 purity ratio.
    pub purity_260_280: Option<f64>,
    /// The storage unit this extract is placed in, if any.
    pub storage_location_id: Option<StorageUnitId>,
    /// The grid slot within the storage unit, if any.
    pub position: Option<Coordinate>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl DnaExtract {
    /// Whether the extract claims a concrete grid slot.
    pub fn is_placed(&self) -> bool {
        self.storage_location_id.is_some() && self.position.is_some()
    }
}
