//! # labvault-placement
//!
//! Slot placement engines for LabVault storage grids.
//!
//! Everything in this crate is a pure, synchronous function over
//! already-fetched in-memory snapshots: the host's state layer fetches
//! live records and calls back in whenever an input changes. No module
//! here performs I/O or owns a subscription.
//!
//! - [`labeler`]: coordinate label generation and parsing
//! - [`occupancy`]: merging legacy and live occupancy sources
//! - [`capacity`]: derived slot counts and ancestor paths
//! - [`allocate`]: deterministic first-free slot assignment
//! - [`batch`]: provisional multi-row placement coordination
//! - [`commit`]: feasibility and staleness checks before writes
//! - [`validate`]: container creation validation

pub mod allocate;
pub mod batch;
pub mod capacity;
pub mod commit;
pub mod labeler;
pub mod occupancy;
pub mod validate;

pub use allocate::{auto_assign, free_slots};
pub use batch::{BatchCoordinator, BatchRow, DropVerdict, RejectReason};
pub use capacity::{ancestor_path, capacity_snapshot};
pub use commit::{SlotAssignment, SlotMove, validate_assignment, verify_still_free};
pub use labeler::{parse_label, slot_label};
pub use occupancy::{OccupancyMap, reconcile_occupancy};
pub use validate::validate_create_unit;
