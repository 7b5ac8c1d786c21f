//! Integration tests for the storage tree engine.

use std::collections::HashSet;

use labvault::entity::storage_unit::{StorageUnit, StorageUnitKind};
use labvault::placement::ancestor_path;
use labvault::tree::{TreeFilter, TreeIndex, compute_visibility, flatten};

use crate::helpers;

/// root -> rack -> box, plus an unrelated sibling subtree.
fn forest() -> (StorageUnit, StorageUnit, StorageUnit, StorageUnit, StorageUnit) {
    let root = helpers::plain_unit("Freezer 1", StorageUnitKind::Freezer, None);
    let rack = helpers::plain_unit("Rack A", StorageUnitKind::Rack, Some(root.id));
    let bx = helpers::plain_unit("Cryo Box 7", StorageUnitKind::Box, Some(rack.id));
    let sibling = helpers::plain_unit("Cabinet 2", StorageUnitKind::Cabinet, None);
    let sibling_child = helpers::plain_unit("Drawer 1", StorageUnitKind::Other, Some(sibling.id));
    (root, rack, bx, sibling, sibling_child)
}

#[test]
fn test_visibility_propagates_to_ancestors() {
    let (root, rack, bx, sibling, sibling_child) = forest();
    let units = vec![
        root.clone(),
        rack.clone(),
        bx.clone(),
        sibling.clone(),
        sibling_child.clone(),
    ];
    let index = TreeIndex::build(&units);

    let filter = TreeFilter::all().with_query("cryo");
    let visible = compute_visibility(&index, &filter);

    assert!(visible.contains(&root.id));
    assert!(visible.contains(&rack.id));
    assert!(visible.contains(&bx.id));
    assert!(!visible.contains(&sibling.id));
    assert!(!visible.contains(&sibling_child.id));
}

#[test]
fn test_external_match_set_counts_as_match() {
    let (root, rack, bx, ..) = forest();
    let units = vec![root.clone(), rack.clone(), bx.clone()];
    let index = TreeIndex::build(&units);

    // Query matches nothing textually, but the search index flagged the box.
    let filter = TreeFilter::all()
        .with_query("zzz")
        .with_matching_ids(HashSet::from([bx.id]));
    let visible = compute_visibility(&index, &filter);
    assert_eq!(visible.len(), 3);
}

#[test]
fn test_flatten_respects_expansion() {
    let (root, rack, bx, sibling, sibling_child) = forest();
    let units = vec![
        root.clone(),
        rack.clone(),
        bx.clone(),
        sibling.clone(),
        sibling_child.clone(),
    ];
    let index = TreeIndex::build(&units);
    let visible = compute_visibility(&index, &TreeFilter::all());

    // Nothing expanded: only roots, name-sorted.
    let rows = flatten(&index, &visible, &HashSet::new());
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![sibling.id, root.id]);
    assert!(rows.iter().all(|r| r.depth == 0));

    // Expand the freezer chain: depths annotate the path.
    let expanded = HashSet::from([root.id, rack.id]);
    let rows = flatten(&index, &visible, &expanded);
    let described: Vec<_> = rows.iter().map(|r| (r.id, r.depth)).collect();
    assert_eq!(
        described,
        vec![
            (sibling.id, 0),
            (root.id, 0),
            (rack.id, 1),
            (bx.id, 2),
        ]
    );
    assert!(rows[1].expanded);
    assert!(!rows[0].expanded);
}

#[test]
fn test_filtered_flatten_skips_invisible_subtrees() {
    let (root, rack, bx, sibling, sibling_child) = forest();
    let units = vec![
        root.clone(),
        rack.clone(),
        bx.clone(),
        sibling.clone(),
        sibling_child.clone(),
    ];
    let index = TreeIndex::build(&units);

    let visible = compute_visibility(&index, &TreeFilter::all().with_query("cryo"));
    let expanded = HashSet::from([root.id, rack.id, sibling.id]);
    let rows = flatten(&index, &visible, &expanded);

    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![root.id, rack.id, bx.id]);
}

#[test]
fn test_kind_filter() {
    let (root, rack, bx, ..) = forest();
    let units = vec![root.clone(), rack.clone(), bx.clone()];
    let index = TreeIndex::build(&units);

    let visible = compute_visibility(&index, &TreeFilter::all().with_kind(StorageUnitKind::Box));
    assert!(visible.contains(&bx.id));
    assert!(visible.contains(&root.id), "ancestors of a match stay visible");
}

#[test]
fn test_dangling_parent_becomes_root() {
    let (root, rack, mut bx, ..) = forest();
    // The box's parent chain is intact, but the rack's parent is missing
    // from the snapshot entirely.
    let units = vec![rack.clone(), bx.clone()];
    let index = TreeIndex::build(&units);
    assert_eq!(index.roots(), &[rack.id]);

    // And a box whose parent was deleted floats up as a root.
    bx.parent_storage_id = Some(root.id);
    let index = TreeIndex::build(&[bx.clone()]);
    assert_eq!(index.roots(), &[bx.id]);
}

#[test]
fn test_deletable_requires_no_children() {
    let (root, rack, bx, ..) = forest();
    let index = TreeIndex::build(&[root.clone(), rack.clone(), bx.clone()]);
    assert!(!index.deletable(root.id));
    assert!(!index.deletable(rack.id));
    assert!(index.deletable(bx.id));
}

#[test]
fn test_breadcrumb_through_index_nodes() {
    let (root, rack, bx, ..) = forest();
    let index = TreeIndex::build(&[root.clone(), rack.clone(), bx.clone()]);

    let path = ancestor_path(&bx, index.nodes());
    assert_eq!(path.full_path(), "Freezer 1 › Rack A › Cryo Box 7");
    assert_eq!(path.depth(), 2);
}
