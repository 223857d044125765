use authseq_core::{
    SequenceStore,
    grouping::{Lane, LaneCounts, max_depth},
    models::Health,
};
use clap::ValueEnum;
use serde::Serialize;

// Mirrors the tallies in `LaneCounts`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LaneFilter {
    All,
    Critical,
    Expiring,
    Healthy,
}

impl LaneFilter {
    pub fn admits(self, health: Health) -> bool {
        match self {
            Self::All => true,
            Self::Critical => health == Health::Critical,
            Self::Expiring => health == Health::Warning,
            Self::Healthy => matches!(health, Health::Healthy | Health::Empty),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanesReport<'a> {
    counts: LaneCounts,
    max_depth: usize,
    lanes: Vec<Lane<'a>>,
}

/// Counts and depth cover every lane; only the listing is filtered.
pub fn report(store: &SequenceStore, filter: LaneFilter) -> LanesReport<'_> {
    let mut lanes = store.lanes();
    let counts = lanes.iter().collect();
    let max_depth = max_depth(&lanes);
    lanes.retain(|lane| filter.admits(lane.health));
    LanesReport {
        counts,
        max_depth,
        lanes,
    }
}
