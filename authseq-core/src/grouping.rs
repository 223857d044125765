//! Read-only aggregations over enriched records.
//!
//! Every function here borrows the canonical record list and rebuilds its
//! view on demand; nothing is cached. Output is ordered by ascending terminal
//! id, then product code, so repeated calls always agree.

mod cell;
mod lane;
mod location;
mod stack;

pub use cell::{Cell, CellCounts, cell, cells};
pub use lane::{Lane, LaneCounts, lane_health, lanes, max_depth};
pub use location::{LocationGroup, ProductGroup, by_location, by_product};
pub use stack::{StackSummary, stack, stacks};

use crate::models::{EnrichedRecord, Map};
use std::hash::Hash;

/// The two ways list-style reports can be sectioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GroupBy {
    /// One section per terminal
    #[default]
    Location,
    /// One section per product
    Product,
}

/// Items that know which section they fall in
pub trait Sectioned {
    /// The heading of the section this item belongs to
    fn section_label(&self, by: GroupBy) -> String;
}

/// A labelled run of items
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section<T> {
    /// Section heading
    pub label: String,
    /// Items, in the order they were given
    pub items: Vec<T>,
}

/// Splits `items` into sections, keeping the order in which sections first appear.
pub fn sections<T: Sectioned>(items: Vec<T>, by: GroupBy) -> Vec<Section<T>> {
    let mut grouped = Map::<String, Vec<T>>::default();
    for item in items {
        grouped.entry(item.section_label(by)).or_default().push(item);
    }
    grouped
        .into_iter()
        .map(|(label, items)| Section { label, items })
        .collect()
}

/// Heading for a terminal section, e.g. `"201 DES MOINES"`
pub(crate) fn location_label(record: &EnrichedRecord) -> String {
    format!("{} {}", record.location_id, record.location)
}

/// Heading for a product section, e.g. `"A — 91 OCTANE w/o 10% ETH"`
pub(crate) fn product_label(record: &EnrichedRecord) -> String {
    format!("{} — {}", record.product_code, record.product_name)
}

// Buckets records by `key`. Buckets come out sorted by key; members keep arrival order.
fn bucket<'a, I, K, F>(records: I, key: F) -> Map<K, Vec<&'a EnrichedRecord>>
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
    K: Eq + Hash + Ord,
    F: Fn(&'a EnrichedRecord) -> K,
{
    let mut buckets = Map::<K, Vec<&'a EnrichedRecord>>::default();
    for record in records {
        buckets.entry(key(record)).or_default().push(record);
    }
    buckets.sort_unstable_keys();
    buckets
}

// Buckets records into priority stacks, each ordered by rank.
fn bucket_stacks<'a, I, K, F>(records: I, key: F) -> Map<K, Vec<&'a EnrichedRecord>>
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
    K: Eq + Hash + Ord,
    F: Fn(&'a EnrichedRecord) -> K,
{
    let mut stacks = bucket(records, key);
    for members in stacks.values_mut() {
        members.sort_by_key(|record| record.sequence);
    }
    stacks
}
