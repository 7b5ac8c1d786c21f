//! Shared entity builders for integration tests.

use chrono::Utc;

use labvault::core::types::{Coordinate, DnaExtractId, SampleId, StorageUnitId};
use labvault::entity::DnaExtract;
use labvault::entity::sample::{Sample, SampleStatus};
use labvault::entity::storage_unit::{
    GridSpec, LabelSchema, StorageUnit, StorageUnitKind, StorageUnitStatus,
};

/// A slotted box with an alpha-numeric grid and no parent.
pub fn grid_unit(label: &str, rows: u32, cols: u32) -> StorageUnit {
    StorageUnit {
        id: StorageUnitId::new(),
        storage_id: label.to_string(),
        name: label.to_string(),
        kind: StorageUnitKind::Box,
        status: StorageUnitStatus::Active,
        parent_storage_id: None,
        grid: Some(GridSpec::new(rows, cols, LabelSchema::AlphaNumeric)),
        capacity_slots: None,
        occupied_slots: Default::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A gridless unit (freezer, rack) with an optional parent.
pub fn plain_unit(name: &str, kind: StorageUnitKind, parent: Option<StorageUnitId>) -> StorageUnit {
    StorageUnit {
        id: StorageUnitId::new(),
        storage_id: name.to_uppercase().replace(' ', "-"),
        name: name.to_string(),
        kind,
        status: StorageUnitStatus::Active,
        parent_storage_id: parent,
        grid: None,
        capacity_slots: None,
        occupied_slots: Default::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A sample placed on a slot of the given unit.
pub fn placed_sample(label: &str, unit: &StorageUnit, slot: &str) -> Sample {
    Sample {
        id: SampleId::new(),
        sample_id: label.to_string(),
        name: label.to_string(),
        organism: None,
        sample_type: None,
        status: SampleStatus::Active,
        storage_location_id: Some(unit.id),
        position: Some(Coordinate::new(slot)),
        collected_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A DNA extract placed on a slot of the given unit.
pub fn placed_extract(label: &str, unit: &StorageUnit, slot: &str) -> DnaExtract {
    DnaExtract {
        id: DnaExtractId::new(),
        extract_id: label.to_string(),
        source_sample_id: None,
        extraction_method: None,
        concentration_ng_ul: None,
        purity_260_280: None,
        storage_location_id: Some(unit.id),
        position: Some(Coordinate::new(slot)),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
