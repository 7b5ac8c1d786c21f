//! Storage unit entities: containment nodes, grid layouts, capacity types.

pub mod capacity;
pub mod grid;
pub mod model;

pub use capacity::{CapacitySnapshot, StoragePath};
pub use grid::{GridSpec, LabelSchema};
pub use model::{CreateStorageUnit, StorageUnit, StorageUnitKind, StorageUnitStatus};
