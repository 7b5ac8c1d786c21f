//! Integration tests for auto-assignment and commit validation.

use std::collections::HashSet;

use labvault::core::error::ErrorKind;
use labvault::core::types::Coordinate;
use labvault::placement::{
    auto_assign, reconcile_occupancy, validate_assignment, verify_still_free,
};

use crate::helpers;

/// The end-to-end scenario: a 2x2 box filling up slot by slot.
#[test]
fn test_fill_container_end_to_end() {
    let mut unit = helpers::grid_unit("FRZ-1", 2, 2);
    let first = helpers::placed_sample("SMP-1", &unit, "A1");

    // One sample at A1: auto-assign offers A2.
    let map = reconcile_occupancy(&unit, &[first.clone()], &[], &HashSet::new());
    let grid = unit.grid.clone().unwrap();
    let slot = auto_assign(&grid, &map.occupied_coordinates()).unwrap();
    assert_eq!(slot, Coordinate::new("A2"));

    // Second sample takes A2: next free is B1.
    let second = helpers::placed_sample("SMP-2", &unit, "A2");
    let map = reconcile_occupancy(&unit, &[first.clone(), second.clone()], &[], &HashSet::new());
    let slot = auto_assign(&grid, &map.occupied_coordinates()).unwrap();
    assert_eq!(slot, Coordinate::new("B1"));

    // Disable B2: with A1/A2 occupied and B1 claimed, nothing is left.
    unit.grid
        .as_mut()
        .unwrap()
        .disabled_slots
        .insert(Coordinate::new("B2"));
    let third = helpers::placed_sample("SMP-3", &unit, "B1");
    let map = reconcile_occupancy(&unit, &[first, second, third], &[], &HashSet::new());
    let err = auto_assign(unit.grid.as_ref().unwrap(), &map.occupied_coordinates()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoCapacity);
}

#[test]
fn test_mixed_sources_count_as_occupied() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);
    let sample = helpers::placed_sample("SMP-1", &unit, "A1");
    let extract = helpers::placed_extract("EXT-1", &unit, "A2");

    let map = reconcile_occupancy(&unit, &[sample], &[extract], &HashSet::new());
    let slot = auto_assign(unit.grid.as_ref().unwrap(), &map.occupied_coordinates()).unwrap();
    assert_eq!(slot, Coordinate::new("B1"));
}

/// Moving an item within one container: its own slot must read as free.
#[test]
fn test_move_excludes_subject_record() {
    let unit = helpers::grid_unit("BOX-1", 1, 2);
    let moving = helpers::placed_sample("SMP-1", &unit, "A1");
    let other = helpers::placed_sample("SMP-2", &unit, "A2");

    // Reconcile without the moving sample: A1 is free again.
    let map = reconcile_occupancy(&unit, &[other], &[], &HashSet::new());
    let assignment = validate_assignment(&unit, &map, Coordinate::new("A1")).unwrap();
    assert_eq!(assignment.coordinate, moving.position.unwrap());
}

#[test]
fn test_direct_placement_conflict_rejected() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);
    let sample = helpers::placed_sample("SMP-1", &unit, "B1");
    let map = reconcile_occupancy(&unit, &[sample], &[], &HashSet::new());

    let err = validate_assignment(&unit, &map, Coordinate::new("b1")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::SlotOccupied);
}

/// Optimistic concurrency: a slot claimed between snapshot and commit.
#[test]
fn test_commit_detects_stale_snapshot() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);

    // Assignment computed against an empty snapshot.
    let empty = reconcile_occupancy(&unit, &[], &[], &HashSet::new());
    let assignment = validate_assignment(&unit, &empty, Coordinate::new("A1")).unwrap();

    // Another actor placed a sample before our commit.
    let racer = helpers::placed_sample("SMP-RACE", &unit, "A1");
    let fresh = reconcile_occupancy(&unit, &[racer], &[], &HashSet::new());

    let err = verify_still_free(&fresh, &assignment.coordinate).unwrap_err();
    assert_eq!(err.kind, ErrorKind::StaleSnapshot);
}
