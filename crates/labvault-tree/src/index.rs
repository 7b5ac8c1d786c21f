//! Index over the storage containment forest.

use std::collections::HashMap;

use labvault_core::types::StorageUnitId;
use labvault_entity::storage_unit::StorageUnit;

/// Parent/child index built from a flat snapshot of storage units.
///
/// Children are sorted by name (then id, for stability) so repeated
/// builds over the same snapshot flatten identically. A unit whose
/// parent id is absent from the snapshot is treated as a root: orphaned
/// subtrees stay navigable instead of vanishing.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    nodes: HashMap<StorageUnitId, StorageUnit>,
    children: HashMap<StorageUnitId, Vec<StorageUnitId>>,
    roots: Vec<StorageUnitId>,
}

impl TreeIndex {
    /// Build the index from a snapshot of units.
    pub fn build(units: &[StorageUnit]) -> Self {
        let nodes: HashMap<StorageUnitId, StorageUnit> =
            units.iter().map(|u| (u.id, u.clone())).collect();

        let mut children: HashMap<StorageUnitId, Vec<StorageUnitId>> = HashMap::new();
        let mut roots: Vec<StorageUnitId> = Vec::new();
        for unit in nodes.values() {
            match unit.parent_storage_id {
                Some(parent_id) if nodes.contains_key(&parent_id) => {
                    children.entry(parent_id).or_default().push(unit.id);
                }
                // No parent, or a dangling parent reference.
                _ => roots.push(unit.id),
            }
        }

        let by_name = |a: &StorageUnitId, b: &StorageUnitId| {
            let (na, nb) = (&nodes[a].name, &nodes[b].name);
            na.cmp(nb).then_with(|| a.cmp(b))
        };
        roots.sort_by(by_name);
        for ids in children.values_mut() {
            ids.sort_by(by_name);
        }

        Self {
            nodes,
            children,
            roots,
        }
    }

    /// Root unit ids, name-sorted.
    pub fn roots(&self) -> &[StorageUnitId] {
        &self.roots
    }

    /// A unit by id.
    pub fn node(&self, id: StorageUnitId) -> Option<&StorageUnit> {
        self.nodes.get(&id)
    }

    /// All units keyed by id, for ancestor-path computation.
    pub fn nodes(&self) -> &HashMap<StorageUnitId, StorageUnit> {
        &self.nodes
    }

    /// Child ids of a unit, name-sorted (empty for leaves).
    pub fn children(&self, id: StorageUnitId) -> &[StorageUnitId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a unit has any children.
    pub fn has_children(&self, id: StorageUnitId) -> bool {
        !self.children(id).is_empty()
    }

    /// Total number of indexed units.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no units.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a unit may be deleted.
    ///
    /// Deleting a unit that still has children would orphan its subtree
    /// (children are never cascade-deleted), so it is refused; callers
    /// must reparent or delete the children first.
    pub fn deletable(&self, id: StorageUnitId) -> bool {
        !self.has_children(id)
    }
}
