//! Integration tests for occupancy reconciliation and capacity snapshots.

use std::collections::HashSet;

use labvault::core::types::Coordinate;
use labvault::entity::occupant::{Occupant, OccupantKind};
use labvault::placement::{capacity_snapshot, reconcile_occupancy};

use crate::helpers;

#[test]
fn test_live_sample_beats_legacy_entry() {
    let mut unit = helpers::grid_unit("BOX-1", 8, 12);
    unit.occupied_slots
        .insert(Coordinate::new("A1"), "old import".to_string());
    let sample = helpers::placed_sample("SMP-1", &unit, "a1");

    let map = reconcile_occupancy(&unit, &[sample.clone()], &[], &HashSet::new());

    let occupant = map.get(&Coordinate::new("A1")).expect("slot occupied");
    assert_eq!(occupant.kind(), OccupantKind::Sample);
    assert_eq!(occupant.display_label(), "SMP-1");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_legacy_entries_survive_as_unknown() {
    let mut unit = helpers::grid_unit("BOX-1", 2, 2);
    unit.occupied_slots
        .insert(Coordinate::new("B2"), "mystery tube".to_string());

    let map = reconcile_occupancy(&unit, &[], &[], &HashSet::new());

    assert_eq!(
        map.get(&Coordinate::new("B2")),
        Some(&Occupant::Unknown {
            label: "mystery tube".to_string()
        })
    );
}

#[test]
fn test_additional_does_not_override_live() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);
    let extract = helpers::placed_extract("EXT-7", &unit, "A2");
    let additional = HashSet::from([Coordinate::new("A2"), Coordinate::new("B1")]);

    let map = reconcile_occupancy(&unit, &[], &[extract], &additional);

    assert_eq!(
        map.get(&Coordinate::new("A2")).map(Occupant::kind),
        Some(OccupantKind::DnaExtract)
    );
    assert_eq!(
        map.get(&Coordinate::new("B1")).map(Occupant::kind),
        Some(OccupantKind::Unknown)
    );
}

#[test]
fn test_records_in_other_units_are_ignored() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);
    let other = helpers::grid_unit("BOX-2", 2, 2);
    let sample = helpers::placed_sample("SMP-9", &other, "A1");

    let map = reconcile_occupancy(&unit, &[sample], &[], &HashSet::new());
    assert!(map.is_empty());
}

#[test]
fn test_capacity_arithmetic() {
    let mut unit = helpers::grid_unit("BOX-1", 8, 12);
    {
        let grid = unit.grid.as_mut().unwrap();
        grid.disabled_slots.insert(Coordinate::new("A1"));
        grid.disabled_slots.insert(Coordinate::new("A2"));
    }
    let samples: Vec<_> = (0..10)
        .map(|col| {
            helpers::placed_sample(&format!("SMP-{col}"), &unit, &format!("B{}", col + 1))
        })
        .collect();

    let map = reconcile_occupancy(&unit, &samples, &[], &HashSet::new());
    let snapshot = capacity_snapshot(&unit, &map);

    assert_eq!(snapshot.theoretical, 96);
    assert_eq!(snapshot.effective, 94);
    assert_eq!(snapshot.available, 84);
}

#[test]
fn test_empty_inputs_tolerated() {
    let unit = helpers::grid_unit("BOX-1", 2, 2);
    let map = reconcile_occupancy(&unit, &[], &[], &HashSet::new());
    let snapshot = capacity_snapshot(&unit, &map);
    assert_eq!(snapshot.available, 4);
}
