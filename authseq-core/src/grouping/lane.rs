use super::{LocationGroup, by_location};
use crate::models::{EnrichedRecord, Health, HealthCounts, HealthPolicy, LaneHealth, LocationId};

/// One terminal's swimlane: every stack there, plus a status-only health.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Lane<'a> {
    /// The terminal and its stacks
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub group: LocationGroup<'a>,
    /// Rolled up under [`LaneHealth`] across all products
    pub health: Health,
    /// Member counts per status
    pub counts: HealthCounts,
    /// The product shown when the lane is first opened
    pub default_product: Option<&'a str>,
}

impl<'a> Lane<'a> {
    fn new(group: LocationGroup<'a>) -> Self {
        let health = LaneHealth::assess(group.records());
        let counts = group.records().collect();
        let default_product = default_product(&group);
        Self {
            group,
            health,
            counts,
            default_product,
        }
    }

    /// Size of the deepest stack in this lane
    pub fn depth(&self) -> usize {
        self.group.products.values().map(Vec::len).max().unwrap_or(0)
    }
}

// The product with the most suppliers; ties go to the alphabetically first code.
fn default_product<'a>(group: &LocationGroup<'a>) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (&code, members) in &group.products {
        // products are sorted, so a strict comparison keeps the earliest code on ties
        if best.is_none_or(|(_, count)| members.len() > count) {
            best = Some((code, members.len()));
        }
    }
    best.map(|(code, _)| code)
}

/// Tally of lanes per health, for the lane filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaneCounts {
    /// Every lane
    pub all: usize,
    /// Lanes with an expired member
    pub critical: usize,
    /// Lanes with an expiring member and nothing expired
    pub expiring: usize,
    /// Everything else
    pub healthy: usize,
}

impl<'a, 'b> FromIterator<&'b Lane<'a>> for LaneCounts {
    fn from_iter<I: IntoIterator<Item = &'b Lane<'a>>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut counts, lane| {
            counts.all += 1;
            match lane.health {
                Health::Critical => counts.critical += 1,
                Health::Warning => counts.expiring += 1,
                Health::Healthy | Health::Empty => counts.healthy += 1,
            }
            counts
        })
    }
}

/// One lane per terminal, in terminal order.
pub fn lanes(records: &[EnrichedRecord]) -> Vec<Lane<'_>> {
    by_location(records).into_iter().map(Lane::new).collect()
}

/// Status-only health of one terminal across all its products.
pub fn lane_health(records: &[EnrichedRecord], location_id: LocationId) -> Health {
    LaneHealth::assess(
        records
            .iter()
            .filter(|record| record.location_id == location_id),
    )
}

/// The deepest stack across `lanes`, used to pad shallower stacks with empty slots.
pub fn max_depth(lanes: &[Lane<'_>]) -> usize {
    lanes.iter().map(Lane::depth).max().unwrap_or(0)
}
