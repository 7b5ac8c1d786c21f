//! Grid layout definition for slotted containers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use labvault_core::types::Coordinate;

/// How slot coordinates inside a grid are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSchema {
    /// Letter row, 1-based column: `A1`, `B12`.
    AlphaNumeric,
    /// 1-based row and column joined by a dash: `1-1`, `3-7`.
    Numeric,
    /// Opaque labels supplied externally; never generated.
    Custom,
}

/// A container's 2D slot layout.
///
/// Rows and columns are 0-indexed internally; displayed coordinates are
/// 1-indexed (or A-indexed) per the label schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Coordinate labeling scheme.
    pub label_schema: LabelSchema,
    /// Slots permanently blocked off (broken rack positions, etc.).
    #[serde(default)]
    pub disabled_slots: HashSet<Coordinate>,
}

impl GridSpec {
    /// Create a grid with no disabled slots.
    pub fn new(rows: u32, cols: u32, label_schema: LabelSchema) -> Self {
        Self {
            rows,
            cols,
            label_schema,
            disabled_slots: HashSet::new(),
        }
    }

    /// Total slot count, `rows * cols`.
    pub fn theoretical_slots(&self) -> u32 {
        self.rows * self.cols
    }

    /// Theoretical slots minus permanently disabled slots, clamped to zero.
    pub fn effective_slots(&self) -> u32 {
        self.theoretical_slots()
            .saturating_sub(self.disabled_slots.len() as u32)
    }

    /// Whether the given coordinate is permanently disabled.
    pub fn is_disabled(&self, coordinate: &Coordinate) -> bool {
        self.disabled_slots.contains(coordinate)
    }
}
