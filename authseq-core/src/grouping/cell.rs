use super::{GroupBy, Sectioned, bucket_stacks, location_label, product_label};
use crate::models::{CellHealth, EnrichedRecord, GroupKey, Health, HealthPolicy};

/// One priority stack as a heat-map cell.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Cell<'a> {
    /// The stack this cell shows
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub key: GroupKey,
    /// Display name of the terminal, if the stack has any members
    pub location: Option<&'a str>,
    /// Resolved product name, if the stack has any members
    pub product_name: Option<&'a str>,
    /// Members, ordered by rank
    pub entries: Vec<&'a EnrichedRecord>,
    /// Rolled up under [`CellHealth`]
    pub health: Health,
}

impl<'a> Cell<'a> {
    fn new(key: GroupKey, entries: Vec<&'a EnrichedRecord>) -> Self {
        let head = entries.first();
        Self {
            location: head.map(|record| record.location.as_str()),
            product_name: head.map(|record| record.product_name.as_str()),
            health: CellHealth::assess(entries.iter().copied()),
            key,
            entries,
        }
    }
}

impl Sectioned for Cell<'_> {
    fn section_label(&self, by: GroupBy) -> String {
        match (by, self.entries.first()) {
            (GroupBy::Location, Some(head)) => location_label(head),
            (GroupBy::Product, Some(head)) => product_label(head),
            (GroupBy::Location, None) => self.key.location_id.to_string(),
            (GroupBy::Product, None) => self.key.product_code.clone(),
        }
    }
}

/// Tally of cells per health, for the matrix header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellCounts {
    /// Every cell
    pub total: usize,
    /// Cells rolled up as critical
    pub critical: usize,
    /// Cells rolled up as warning
    pub warning: usize,
}

impl<'a, 'b> FromIterator<&'b Cell<'a>> for CellCounts {
    fn from_iter<I: IntoIterator<Item = &'b Cell<'a>>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut counts, cell| {
            counts.total += 1;
            match cell.health {
                Health::Critical => counts.critical += 1,
                Health::Warning => counts.warning += 1,
                Health::Healthy | Health::Empty => {}
            }
            counts
        })
    }
}

/// One cell per populated stack, in key order.
pub fn cells(records: &[EnrichedRecord]) -> Vec<Cell<'_>> {
    bucket_stacks(records, EnrichedRecord::key)
        .into_iter()
        .map(|(key, entries)| Cell::new(key, entries))
        .collect()
}

/// The cell for `key`, which is [`Health::Empty`] when nothing is authorized there.
pub fn cell<'a>(records: &'a [EnrichedRecord], key: &GroupKey) -> Cell<'a> {
    let mut entries: Vec<_> = records.iter().filter(|record| record.is_in(key)).collect();
    entries.sort_by_key(|record| record.sequence);
    Cell::new(key.clone(), entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authorization, EndDate, LocationId, RecordId, Status, SupplierId, Tier};

    fn entry(sequence: u32, status: Status) -> EnrichedRecord {
        EnrichedRecord {
            id: RecordId(sequence),
            location: "DES MOINES".to_owned(),
            location_id: LocationId(201),
            product_code: "A".to_owned(),
            product_name: "91 OCTANE w/o 10% ETH".to_owned(),
            short_name: "91 OCT w/o ETH".to_owned(),
            sequence,
            status,
            authorization: Authorization {
                supplier: format!("Supplier {sequence}"),
                supplier_id: SupplierId(sequence),
                tier: Tier::Unlimited,
                volume: None,
                renewal_volume: None,
                end_date: EndDate::NoExpiry,
                active: true,
            },
        }
    }

    #[test]
    fn one_expired_member_is_critical() {
        let records = vec![
            entry(1, Status::Active),
            entry(2, Status::Expired),
            entry(3, Status::Active),
        ];
        let cells = cells(&records);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].health, Health::Critical);
    }

    #[test]
    fn missing_stack_is_empty() {
        let records = vec![entry(1, Status::Active)];
        let empty = cell(&records, &GroupKey::new(LocationId(201), "E"));
        assert_eq!(empty.health, Health::Empty);
        assert!(empty.location.is_none());
        assert_eq!(empty.section_label(GroupBy::Product), "E");
    }
}
