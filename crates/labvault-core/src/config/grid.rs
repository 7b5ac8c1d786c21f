//! Grid validation limits and defaults.

use serde::{Deserialize, Serialize};

/// Limits applied when validating a new container's grid layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Maximum number of grid rows accepted at creation time.
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
    /// Maximum number of grid columns accepted at creation time.
    #[serde(default = "default_max_cols")]
    pub max_cols: u32,
    /// Default label schema for new grids: `"alpha_numeric"` or `"numeric"`.
    #[serde(default = "default_label_schema")]
    pub default_label_schema: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            max_cols: default_max_cols(),
            default_label_schema: default_label_schema(),
        }
    }
}

fn default_max_rows() -> u32 {
    100
}

fn default_max_cols() -> u32 {
    100
}

fn default_label_schema() -> String {
    "alpha_numeric".to_string()
}
