use authseq_core::{
    SequenceStore,
    models::{EnrichedRecord, GroupKey, LocationId, Tier},
    reorder::reorder,
};
use rstest::*;
use time::macros::date;

#[fixture]
pub fn records() -> Vec<EnrichedRecord> {
    SequenceStore::from_fixture(date!(2026 - 02 - 25))
        .records()
        .to_vec()
}

#[fixture]
pub fn des_moines_a() -> GroupKey {
    GroupKey::new(LocationId(201), "A")
}

fn outside<'a>(records: &'a [EnrichedRecord], key: &GroupKey) -> Vec<&'a EnrichedRecord> {
    records.iter().filter(|record| !record.is_in(key)).collect()
}

fn occupants(records: &[EnrichedRecord], key: &GroupKey) -> Vec<(u32, String, Tier)> {
    let mut stack: Vec<_> = records
        .iter()
        .filter(|record| record.is_in(key))
        .map(|record| {
            (
                record.sequence,
                record.authorization.supplier.clone(),
                record.authorization.tier,
            )
        })
        .collect();
    stack.sort_by_key(|(sequence, _, _)| *sequence);
    stack
}

#[rstest]
fn promote_third_to_first(records: Vec<EnrichedRecord>, des_moines_a: GroupKey) {
    let next = reorder(&records, &des_moines_a, 3, 1);

    assert_eq!(
        occupants(&next, &des_moines_a),
        [
            (1, "Foxridge Supply Group".to_owned(), Tier::Unlimited),
            (2, "Lancer Energy Corp".to_owned(), Tier::SelfSupply),
            (3, "Thornfield Petroleum".to_owned(), Tier::Monthly),
            (4, "Baxter Energy Group".to_owned(), Tier::Monthly),
        ]
    );

    // ethanol at the same terminal is a different stack
    let ethanol = GroupKey::new(LocationId(201), "E");
    let before: Vec<_> = records.iter().filter(|r| r.is_in(&ethanol)).collect();
    let after: Vec<_> = next.iter().filter(|r| r.is_in(&ethanol)).collect();
    assert_eq!(before, after);
}

#[rstest]
fn slots_keep_their_identity(records: Vec<EnrichedRecord>, des_moines_a: GroupKey) {
    let next = reorder(&records, &des_moines_a, 3, 1);
    for (old, new) in records.iter().zip(&next) {
        assert_eq!(old.id, new.id);
        assert_eq!(old.sequence, new.sequence);
        assert_eq!(old.location_id, new.location_id);
        assert_eq!(old.product_code, new.product_code);
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn same_rank_is_noop(records: Vec<EnrichedRecord>, des_moines_a: GroupKey, #[case] rank: u32) {
    assert_eq!(reorder(&records, &des_moines_a, rank, rank), records);
}

#[rstest]
#[case(1, 2)]
#[case(1, 4)]
#[case(3, 1)]
#[case(4, 2)]
#[case(2, 3)]
fn moving_back_restores_order(
    records: Vec<EnrichedRecord>,
    des_moines_a: GroupKey,
    #[case] a: u32,
    #[case] b: u32,
) {
    let there = reorder(&records, &des_moines_a, a, b);
    assert_ne!(there, records);
    let back = reorder(&there, &des_moines_a, b, a);
    assert_eq!(back, records);
}

#[rstest]
#[case(GroupKey::new(LocationId(201), "A"), 1, 4)]
#[case(GroupKey::new(LocationId(207), "A"), 3, 1)]
#[case(GroupKey::new(LocationId(347), "V"), 2, 3)]
fn other_stacks_are_isolated(
    records: Vec<EnrichedRecord>,
    #[case] key: GroupKey,
    #[case] from: u32,
    #[case] to: u32,
) {
    let next = reorder(&records, &key, from, to);
    assert_eq!(outside(&records, &key), outside(&next, &key));
}

#[rstest]
fn single_member_stack_is_noop(records: Vec<EnrichedRecord>) {
    let lone = GroupKey::new(LocationId(201), "A78");
    assert_eq!(reorder(&records, &lone, 1, 2), records);
}

#[rstest]
fn unknown_stack_is_noop(records: Vec<EnrichedRecord>) {
    let nowhere = GroupKey::new(LocationId(999), "A");
    assert_eq!(reorder(&records, &nowhere, 1, 2), records);
}

#[rstest]
fn status_travels_with_supplier(records: Vec<EnrichedRecord>) {
    // Thornfield's expired weekly authorization sits at rank 2 of DES MOINES "V"
    let key = GroupKey::new(LocationId(201), "V");
    let next = reorder(&records, &key, 2, 1);
    let top = next
        .iter()
        .find(|record| record.is_in(&key) && record.sequence == 1)
        .unwrap();
    assert_eq!(top.authorization.supplier, "Thornfield Petroleum");
    assert_eq!(top.status, authseq_core::models::Status::Expired);
}

#[rstest]
fn store_reorder_and_move_agree(des_moines_a: GroupKey) {
    let mut by_rank = SequenceStore::from_fixture(date!(2026 - 02 - 25));
    let mut by_id = by_rank.clone();

    let ranked = by_rank.reorder(&des_moines_a, 3, 1).to_vec();
    // Foxridge's row is the ninth loaded
    let moved = by_id
        .move_record(authseq_core::models::RecordId(9), 1)
        .to_vec();
    assert_eq!(ranked, moved);
    assert_eq!(
        by_rank.stack(&des_moines_a)[0].authorization.supplier,
        "Foxridge Supply Group"
    );
}
