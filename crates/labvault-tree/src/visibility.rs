//! Filter-driven visibility propagation.
//!
//! A unit is visible when it matches the filter itself or when any
//! descendant does, so the ancestor chain of every match stays in the
//! tree. Results are memoized per id; a unit currently being evaluated
//! reads as not-visible to its own descendants, which keeps the
//! recursion safe on corrupted (cyclic) parent data.

use std::collections::{HashMap, HashSet};

use labvault_core::types::StorageUnitId;

use crate::filter::TreeFilter;
use crate::index::TreeIndex;

/// Compute the set of visible unit ids for the given filter.
///
/// Every indexed unit is evaluated, so the flattening pass may safely
/// skip a non-visible unit's whole subtree: non-visibility here already
/// proves no descendant matches.
pub fn compute_visibility(index: &TreeIndex, filter: &TreeFilter) -> HashSet<StorageUnitId> {
    if filter.is_unfiltered() {
        return index.nodes().keys().copied().collect();
    }

    let mut memo: HashMap<StorageUnitId, bool> = HashMap::new();
    for &id in index.nodes().keys() {
        visit(id, index, filter, &mut memo);
    }
    memo.into_iter()
        .filter_map(|(id, visible)| visible.then_some(id))
        .collect()
}

fn visit(
    id: StorageUnitId,
    index: &TreeIndex,
    filter: &TreeFilter,
    memo: &mut HashMap<StorageUnitId, bool>,
) -> bool {
    if let Some(&cached) = memo.get(&id) {
        return cached;
    }
    // In-progress marker; a cycle back to this id resolves as not visible.
    memo.insert(id, false);

    let visible = match index.node(id) {
        Some(unit) => {
            filter.matches(unit)
                || index
                    .children(id)
                    .iter()
                    .any(|&child| visit(child, index, filter, memo))
        }
        None => false,
    };
    memo.insert(id, visible);
    visible
}
