//! Depth-first flattening of the visible forest into renderable rows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use labvault_core::types::StorageUnitId;

use crate::index::TreeIndex;

/// One renderable row of the storage tree panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    /// The unit this row renders.
    pub id: StorageUnitId,
    /// Indentation depth (0 for roots).
    pub depth: usize,
    /// Whether the row shows an expand/collapse affordance.
    pub has_children: bool,
    /// Whether the row's children are currently walked.
    pub expanded: bool,
}

/// Flatten the visible forest into a depth-annotated row list.
///
/// Emits a row for every visible unit in depth-first order, descending
/// into children only when the unit has any and is in `expanded`. A
/// non-visible unit's subtree is skipped outright: visibility is
/// computed for whole subtrees first, so non-visibility of a unit
/// already implies no visible descendants beneath it.
pub fn flatten(
    index: &TreeIndex,
    visible: &HashSet<StorageUnitId>,
    expanded: &HashSet<StorageUnitId>,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for &root in index.roots() {
        walk(root, 0, index, visible, expanded, &mut rows);
    }
    rows
}

fn walk(
    id: StorageUnitId,
    depth: usize,
    index: &TreeIndex,
    visible: &HashSet<StorageUnitId>,
    expanded: &HashSet<StorageUnitId>,
    rows: &mut Vec<TreeRow>,
) {
    if !visible.contains(&id) {
        return;
    }
    // Guard against pathological depth on corrupted data.
    if depth > index.len() {
        return;
    }

    let has_children = index.has_children(id);
    let is_expanded = has_children && expanded.contains(&id);
    rows.push(TreeRow {
        id,
        depth,
        has_children,
        expanded: is_expanded,
    });

    if is_expanded {
        for &child in index.children(id) {
            walk(child, depth + 1, index, visible, expanded, rows);
        }
    }
}
