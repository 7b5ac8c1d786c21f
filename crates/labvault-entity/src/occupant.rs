//! The occupant union attached to a grid coordinate.

use serde::{Deserialize, Serialize};

use labvault_core::types::{DnaExtractId, SampleId};

/// Discriminant of an [`Occupant`], for display badges and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupantKind {
    /// A live sample record.
    Sample,
    /// A live DNA extract record.
    DnaExtract,
    /// A provisional claim by an uncommitted batch row.
    Batch,
    /// A legacy denormalized entry with no type guarantee.
    Unknown,
}

/// What is sitting at a grid coordinate.
///
/// Consumers must match exhaustively; adding an occupant kind is a
/// compile-time-checked change everywhere it is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupant {
    /// A live sample occupies the slot.
    Sample {
        /// The sample's record id.
        id: SampleId,
        /// Accession label shown in the grid cell.
        label: String,
    },
    /// A live DNA extract occupies the slot.
    DnaExtract {
        /// The extract's record id.
        id: DnaExtractId,
        /// Accession label shown in the grid cell.
        label: String,
    },
    /// An uncommitted batch row has claimed the slot. Never persisted.
    Batch {
        /// Index of the claiming row within the batch.
        row_index: usize,
        /// Label shown while the batch is being resolved.
        label: String,
    },
    /// A legacy map entry of unknown type.
    Unknown {
        /// Whatever label the legacy map carried.
        label: String,
    },
}

impl Occupant {
    /// The occupant's discriminant.
    pub fn kind(&self) -> OccupantKind {
        match self {
            Self::Sample { .. } => OccupantKind::Sample,
            Self::DnaExtract { .. } => OccupantKind::DnaExtract,
            Self::Batch { .. } => OccupantKind::Batch,
            Self::Unknown { .. } => OccupantKind::Unknown,
        }
    }

    /// Label to render for the slot.
    pub fn display_label(&self) -> &str {
        match self {
            Self::Sample { label, .. }
            | Self::DnaExtract { label, .. }
            | Self::Batch { label, .. }
            | Self::Unknown { label } => label,
        }
    }

    /// Whether the occupant exists only within an uncommitted batch.
    pub fn is_provisional(&self) -> bool {
        matches!(self, Self::Batch { .. })
    }
}
