//! Search and type filtering for the storage tree.

use std::collections::HashSet;

use labvault_core::types::StorageUnitId;
use labvault_entity::storage_unit::{StorageUnit, StorageUnitKind};

/// Active filter state of the storage tree panel.
///
/// Fuzzy matching over flattened labels lives in an external search
/// index; this filter only consumes its result set (`matching_ids`)
/// alongside a plain substring match on the unit's own fields.
#[derive(Debug, Clone, Default)]
pub struct TreeFilter {
    query: Option<String>,
    kind: Option<StorageUnitKind>,
    matching_ids: HashSet<StorageUnitId>,
}

impl TreeFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to units matching a search query.
    ///
    /// The query is normalized to lowercase; blank queries are ignored.
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        let normalized = query.as_ref().trim().to_lowercase();
        self.query = (!normalized.is_empty()).then_some(normalized);
        self
    }

    /// Restrict to units of one physical kind.
    pub fn with_kind(mut self, kind: StorageUnitKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Supply the external search index's result set.
    pub fn with_matching_ids(mut self, ids: HashSet<StorageUnitId>) -> Self {
        self.matching_ids = ids;
        self
    }

    /// Whether no query or kind restriction is active.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_none() && self.kind.is_none()
    }

    /// Whether a unit itself satisfies the filter.
    ///
    /// The kind restriction must pass, and then either no query is
    /// active, the unit's own searchable fields contain it, or the
    /// external index flagged the unit.
    pub fn matches(&self, unit: &StorageUnit) -> bool {
        if let Some(kind) = self.kind {
            if unit.kind != kind {
                return false;
            }
        }
        let Some(query) = &self.query else {
            return true;
        };
        unit.name.to_lowercase().contains(query)
            || unit.storage_id.to_lowercase().contains(query)
            || self.matching_ids.contains(&unit.id)
    }
}
