//! LabVault: laboratory storage hierarchy and grid-slot occupancy engine.
//!
//! Facade crate re-exporting the workspace members. Host applications
//! (the LIMS UI and its write layer) depend on this crate and call the
//! pure engines with already-fetched snapshots:
//!
//! - [`core`]: errors, identifiers, coordinates, configuration
//! - [`entity`]: storage units, samples, DNA extracts, occupants
//! - [`placement`]: labeling, occupancy, capacity, allocation, batches
//! - [`tree`]: storage tree visibility, flattening, virtualization

pub use labvault_core as core;
pub use labvault_entity as entity;
pub use labvault_placement as placement;
pub use labvault_tree as tree;
