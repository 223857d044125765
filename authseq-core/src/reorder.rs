//! Manual re-ranking of a priority stack.
//!
//! A stack is a fixed column of numbered slots. Moving a supplier from one rank
//! to another moves its terms (and status) between slots with list-splice
//! semantics: everything between the two ranks shifts by one. Slot identity
//! (`id`, terminal, product, `sequence`) never changes, so rank *N* always
//! exists and afterwards holds whichever supplier now sits at *N*.

use crate::models::{EnrichedRecord, GroupKey, RecordId};
use tracing::{Level, event};

/// Returns a copy of `records` with the supplier at rank `from` moved to rank `to`.
///
/// `to` is clamped into the stack. Nothing changes when the stack has fewer than
/// two members, when `from` is not a rank in it, or when the move lands where it
/// started. Records outside the stack are never touched.
pub fn reorder(records: &[EnrichedRecord], key: &GroupKey, from: u32, to: u32) -> Vec<EnrichedRecord> {
    let mut next = records.to_vec();
    reorder_in_place(&mut next, key, from, to);
    next
}

/// Like [`reorder`], addressing the moving supplier by the id of the slot it occupies.
pub fn move_record(records: &[EnrichedRecord], id: RecordId, to: u32) -> Vec<EnrichedRecord> {
    let mut next = records.to_vec();
    move_record_in_place(&mut next, id, to);
    next
}

/// In-place form of [`reorder`]; returns whether anything moved.
pub fn reorder_in_place(records: &mut [EnrichedRecord], key: &GroupKey, from: u32, to: u32) -> bool {
    let mut slots: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_in(key))
        .map(|(index, _)| index)
        .collect();
    slots.sort_by_key(|&index| records[index].sequence);

    if slots.len() < 2 {
        event!(Level::DEBUG, %key, "stack has no other rank to move to");
        return false;
    }

    let Some(from_pos) = slots.iter().position(|&index| records[index].sequence == from) else {
        event!(Level::DEBUG, %key, from, "rank not found in stack");
        return false;
    };
    let to_pos = (to.max(1) as usize).min(slots.len()) - 1;
    if from_pos == to_pos {
        return false;
    }

    // a splice is a run of adjacent swaps towards the destination
    if from_pos < to_pos {
        for pos in from_pos..to_pos {
            swap_terms(records, slots[pos], slots[pos + 1]);
        }
    } else {
        for pos in (to_pos..from_pos).rev() {
            swap_terms(records, slots[pos], slots[pos + 1]);
        }
    }

    event!(
        Level::DEBUG,
        %key,
        from,
        to = to_pos + 1,
        "reordered stack"
    );
    true
}

/// In-place form of [`move_record`]; returns whether anything moved.
pub fn move_record_in_place(records: &mut [EnrichedRecord], id: RecordId, to: u32) -> bool {
    let Some((key, from)) = records
        .iter()
        .find(|record| record.id == id)
        .map(|record| (record.key(), record.sequence))
    else {
        event!(Level::DEBUG, %id, "no such record");
        return false;
    };
    reorder_in_place(records, &key, from, to)
}

fn swap_terms(records: &mut [EnrichedRecord], a: usize, b: usize) {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = records.split_at_mut(high);
    let (x, y) = (&mut head[low], &mut tail[0]);
    std::mem::swap(&mut x.authorization, &mut y.authorization);
    std::mem::swap(&mut x.status, &mut y.status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixture::load_fixture,
        models::{LocationId, ProductCatalog},
        sequence::assign_sequences,
    };
    use time::macros::date;

    fn suppliers(records: &[EnrichedRecord], key: &GroupKey) -> Vec<String> {
        crate::grouping::stack(records, key)
            .into_iter()
            .map(|record| record.authorization.supplier.clone())
            .collect()
    }

    #[test]
    fn moving_down_shifts_intermediate_ranks_up() {
        let records = assign_sequences(load_fixture(), &ProductCatalog::standard(), date!(2026 - 02 - 25));
        let key = GroupKey::new(LocationId(201), "A");
        let next = reorder(&records, &key, 1, 3);
        assert_eq!(
            suppliers(&next, &key),
            [
                "Thornfield Petroleum",
                "Foxridge Supply Group",
                "Lancer Energy Corp",
                "Baxter Energy Group"
            ]
        );
    }

    #[test]
    fn target_is_clamped() {
        let records = assign_sequences(load_fixture(), &ProductCatalog::standard(), date!(2026 - 02 - 25));
        let key = GroupKey::new(LocationId(201), "A");
        assert_eq!(reorder(&records, &key, 1, 99), reorder(&records, &key, 1, 4));
        assert_eq!(reorder(&records, &key, 4, 0), reorder(&records, &key, 4, 1));
    }

    #[test]
    fn unknown_rank_is_noop() {
        let records = assign_sequences(load_fixture(), &ProductCatalog::standard(), date!(2026 - 02 - 25));
        let key = GroupKey::new(LocationId(201), "A");
        assert_eq!(reorder(&records, &key, 7, 1), records);
        assert_eq!(reorder(&records, &key, 0, 1), records);
    }

    #[test]
    fn move_by_id_matches_move_by_rank() {
        let records = assign_sequences(load_fixture(), &ProductCatalog::standard(), date!(2026 - 02 - 25));
        let key = GroupKey::new(LocationId(201), "A");
        // Foxridge arrives ninth overall and sits at rank 3
        assert_eq!(move_record(&records, RecordId(9), 1), reorder(&records, &key, 3, 1));
        assert_eq!(move_record(&records, RecordId(999), 1), records);
    }
}
