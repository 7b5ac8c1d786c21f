//! # labvault-entity
//!
//! Domain entity models for LabVault: storage units with their grid
//! layouts, samples and DNA extracts as occupancy sources, and the
//! occupant union attached to grid coordinates.

pub mod extract;
pub mod occupant;
pub mod sample;
pub mod storage_unit;

pub use extract::DnaExtract;
pub use occupant::{Occupant, OccupantKind};
pub use sample::Sample;
pub use storage_unit::{
    CapacitySnapshot, GridSpec, LabelSchema, StoragePath, StorageUnit, StorageUnitKind,
};
