//! Storage tree rendering configuration.

use serde::{Deserialize, Serialize};

/// Virtualized tree view settings.
///
/// The tree panel renders only the rows inside the scrolled viewport plus
/// an overscan margin; both knobs live here so hosts can tune them without
/// recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeViewConfig {
    /// Fixed per-row height estimate in pixels.
    #[serde(default = "default_row_height")]
    pub row_height_px: u32,
    /// Number of extra rows materialized above and below the viewport.
    #[serde(default = "default_overscan")]
    pub overscan_rows: u32,
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            row_height_px: default_row_height(),
            overscan_rows: default_overscan(),
        }
    }
}

fn default_row_height() -> u32 {
    32
}

fn default_overscan() -> u32 {
    8
}
