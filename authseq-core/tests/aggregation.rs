use authseq_core::{
    SequenceStore,
    grouping::{CellCounts, GroupBy, LaneCounts, max_depth, sections},
    models::{GroupKey, Health, HealthCounts, LocationId},
};
use rstest::*;
use time::macros::date;

#[fixture]
pub fn store() -> SequenceStore {
    SequenceStore::from_fixture(date!(2026 - 02 - 25))
}

#[rstest]
fn locations_are_sorted(store: SequenceStore) {
    let groups = store.by_location();
    let ids: Vec<u32> = groups.iter().map(|group| *group.location_id).collect();
    assert_eq!(ids, [201, 207, 227, 245, 336, 347]);

    let great_bend = &groups[3];
    assert_eq!(great_bend.location, "GREAT BEND");
    let codes: Vec<&str> = great_bend.products.keys().copied().collect();
    assert_eq!(codes, ["A", "A5", "B99", "E", "V", "X"]);

    for group in &groups {
        for stack in group.products.values() {
            assert!(stack.windows(2).all(|pair| pair[0].sequence < pair[1].sequence));
        }
    }
}

#[rstest]
fn products_group_terminals(store: SequenceStore) {
    let groups = store.by_product();
    let ethanol = groups
        .iter()
        .find(|group| group.product_code == "E")
        .unwrap();
    assert_eq!(ethanol.product_name, "ETHANOL");
    let terminals: Vec<u32> = ethanol.locations.keys().map(|id| **id).collect();
    assert_eq!(terminals, [201, 207, 227, 245, 336, 347]);
}

#[rstest]
fn cell_health(store: SequenceStore) {
    let cells = store.cells();
    assert_eq!(cells.len(), 29);

    let health_of = |location: u32, code: &str| {
        cells
            .iter()
            .find(|cell| cell.key == GroupKey::new(LocationId(location), code))
            .map(|cell| cell.health)
    };
    // one expired member out of three is enough
    assert_eq!(health_of(207, "A"), Some(Health::Critical));
    // nothing expired, but Yarrow has 1,000 of 15,000 gallons left
    assert_eq!(health_of(347, "A"), Some(Health::Critical));
    assert_eq!(health_of(201, "E"), Some(Health::Healthy));

    let counts: CellCounts = cells.iter().collect();
    assert_eq!(
        counts,
        CellCounts {
            total: 29,
            critical: 9,
            warning: 0
        }
    );
}

#[rstest]
fn cell_warning_when_expiring(mut store: SequenceStore) {
    // the V78 authorization at LINCOLN ends 12/24/2026
    store.refresh(date!(2026 - 12 - 01));
    let cell = store.cell(&GroupKey::new(LocationId(336), "V78"));
    assert_eq!(cell.health, Health::Warning);
}

#[rstest]
fn absent_cell_is_empty(store: SequenceStore) {
    let cell = store.cell(&GroupKey::new(LocationId(347), "B99"));
    assert_eq!(cell.health, Health::Empty);
    assert!(cell.entries.is_empty());
}

#[rstest]
fn lane_policy_ignores_volume(store: SequenceStore) {
    // BETTENDORF has a near-empty cell but nothing expired
    assert_eq!(store.lane_health(LocationId(347)), Health::Healthy);
    assert_eq!(store.lane_health(LocationId(245)), Health::Critical);
    assert_eq!(store.lane_health(LocationId(999)), Health::Empty);
}

#[rstest]
fn lane_warning_when_expiring(mut store: SequenceStore) {
    store.refresh(date!(2026 - 12 - 01));
    assert_eq!(store.lane_health(LocationId(336)), Health::Warning);
}

#[rstest]
fn lanes_summary(store: SequenceStore) {
    let lanes = store.lanes();
    let counts: LaneCounts = lanes.iter().collect();
    assert_eq!(
        counts,
        LaneCounts {
            all: 6,
            critical: 4,
            expiring: 0,
            healthy: 2
        }
    );
    assert_eq!(max_depth(&lanes), 4);

    let des_moines = &lanes[0];
    assert_eq!(des_moines.default_product, Some("A"));
    assert_eq!(
        des_moines.counts,
        HealthCounts {
            critical: 1,
            expiring: 0,
            healthy: 11
        }
    );
    for lane in &lanes {
        assert_eq!(lane.health, store.lane_health(lane.group.location_id));
    }
}

#[rstest]
fn default_product_ties_go_to_first_code(store: SequenceStore) {
    // LINCOLN: A and V both have two suppliers
    let lanes = store.lanes();
    let lincoln = lanes
        .iter()
        .find(|lane| lane.group.location_id == LocationId(336))
        .unwrap();
    assert_eq!(lincoln.default_product, Some("A"));
}

#[rstest]
fn stack_summaries(store: SequenceStore) {
    let stacks = store.stacks();
    assert_eq!(stacks.len(), 29);

    let first = &stacks[0];
    assert_eq!(first.key, GroupKey::new(LocationId(201), "A"));
    assert_eq!(first.sequence_depth, 4);
    assert_eq!(first.worst_status, authseq_core::models::Status::Active);

    let bettendorf: Vec<_> = stacks.iter().filter(|s| s.matches("bett")).collect();
    assert_eq!(bettendorf.len(), 4);
    assert_eq!(stacks.iter().filter(|s| s.matches("b99")).count(), 1);
    assert_eq!(stacks.iter().filter(|s| s.matches("  ")).count(), 29);
    // only a blank query is trimmed
    assert_eq!(stacks.iter().filter(|s| s.matches(" bett")).count(), 0);
    assert_eq!(stacks.iter().filter(|s| s.matches("DES MOINES")).count(), 5);
    assert_eq!(stacks.iter().filter(|s| s.matches("ethanol")).count(), 6);
}

#[rstest]
#[case(GroupBy::Location, 6, "201 DES MOINES")]
#[case(GroupBy::Product, 9, "A — 91 OCTANE w/o 10% ETH")]
fn stack_sections(
    store: SequenceStore,
    #[case] by: GroupBy,
    #[case] count: usize,
    #[case] first: &str,
) {
    let sections = sections(store.stacks(), by);
    assert_eq!(sections.len(), count);
    assert_eq!(sections[0].label, first);
    let items: usize = sections.iter().map(|section| section.items.len()).sum();
    assert_eq!(items, 29);
}
