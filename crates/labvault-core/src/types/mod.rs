//! Shared value types used across the LabVault crates.

pub mod coordinate;
pub mod id;

pub use coordinate::Coordinate;
pub use id::{DnaExtractId, SampleId, StorageUnitId};
