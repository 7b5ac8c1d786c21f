//! Derived capacity and ancestor-path types for storage units.

use serde::{Deserialize, Serialize};

use labvault_core::types::StorageUnitId;
use labvault_core::{AppError, AppResult};

/// Derived slot counts for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySnapshot {
    /// Total slots, `rows * cols` (0 when the unit has no grid).
    pub theoretical: u32,
    /// Theoretical minus permanently disabled slots.
    pub effective: u32,
    /// Effective minus occupied slots.
    pub available: u32,
}

/// Ancestor chain of a storage unit, root to self.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePath {
    /// Ancestor unit ids, root first, ending with the unit itself.
    pub ids: Vec<StorageUnitId>,
    /// Ancestor unit names in the same order.
    pub names: Vec<String>,
    /// True when the walk hit a cycle or the iteration bound and stopped
    /// early; the path is then a best-effort partial chain.
    pub truncated: bool,
}

impl StoragePath {
    /// Depth of the unit in the hierarchy (0 for a root unit).
    pub fn depth(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }

    /// Human-readable breadcrumb, names joined by `" › "`.
    pub fn full_path(&self) -> String {
        self.names.join(" › ")
    }

    /// Return the path, or a `CorruptHierarchy` error if it was truncated.
    ///
    /// For callers that must fail on corrupted parent links instead of
    /// rendering a partial breadcrumb.
    pub fn ensure_intact(&self) -> AppResult<&Self> {
        if self.truncated {
            Err(AppError::corrupt_hierarchy(format!(
                "ancestor walk truncated at '{}'",
                self.full_path()
            )))
        } else {
            Ok(self)
        }
    }
}
