//! Viewport windowing for virtualized tree rendering.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use labvault_core::config::tree::TreeViewConfig;

/// The scrolled viewport over the flattened row list.
///
/// Only rows inside the viewport plus an overscan margin are
/// materialized; all rows share one fixed height estimate, so the
/// window is plain integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scroll offset from the top of the list, in pixels.
    pub scroll_offset_px: u32,
    /// Visible height of the panel, in pixels.
    pub height_px: u32,
    /// Fixed per-row height estimate, in pixels.
    pub row_height_px: u32,
    /// Extra rows materialized above and below the visible span.
    pub overscan_rows: u32,
}

impl Viewport {
    /// A viewport at the top of the list with configured defaults.
    pub fn new(height_px: u32, config: &TreeViewConfig) -> Self {
        Self {
            scroll_offset_px: 0,
            height_px,
            row_height_px: config.row_height_px.max(1),
            overscan_rows: config.overscan_rows,
        }
    }

    /// Move the viewport to a new scroll offset.
    pub fn scrolled_to(mut self, offset_px: u32) -> Self {
        self.scroll_offset_px = offset_px;
        self
    }

    /// Total pixel height of the whole list.
    pub fn total_height_px(&self, total_rows: usize) -> u64 {
        total_rows as u64 * u64::from(self.row_height_px)
    }

    /// The index range of rows to materialize, clamped to the list.
    pub fn row_range(&self, total_rows: usize) -> Range<usize> {
        if total_rows == 0 {
            return 0..0;
        }
        let row_height = u64::from(self.row_height_px.max(1));
        let first_visible = (u64::from(self.scroll_offset_px) / row_height) as usize;
        let visible_count = u64::from(self.height_px).div_ceil(row_height) as usize + 1;

        let overscan = self.overscan_rows as usize;
        let start = first_visible.saturating_sub(overscan).min(total_rows);
        let end = (first_visible + visible_count + overscan).min(total_rows);
        start..end
    }
}
