//! # labvault-tree
//!
//! The navigable storage tree: an index over the containment forest,
//! filter-driven visibility propagation, depth-annotated flattening for
//! the panel renderer, and the fixed-row-height virtualization window.
//!
//! Like the placement engines, everything here is a pure function of
//! immutable snapshots; the host recomputes when nodes, the filter, or
//! the expansion state change.

pub mod filter;
pub mod flatten;
pub mod index;
pub mod viewport;
pub mod visibility;

pub use filter::TreeFilter;
pub use flatten::{TreeRow, flatten};
pub use index::TreeIndex;
pub use viewport::Viewport;
pub use visibility::compute_visibility;
