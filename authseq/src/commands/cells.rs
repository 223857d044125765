use super::{Grouping, Listing};
use authseq_core::{
    SequenceStore,
    grouping::{Cell, CellCounts},
    models::Health,
};
use clap::ValueEnum;
use serde::Serialize;

// The matrix filter; unlike lanes, cells roll volume into their health
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CellFilter {
    All,
    Critical,
    Warning,
    Healthy,
}

impl CellFilter {
    pub fn admits(self, health: Health) -> bool {
        match self {
            Self::All => true,
            Self::Critical => health == Health::Critical,
            Self::Warning => health == Health::Warning,
            Self::Healthy => matches!(health, Health::Healthy | Health::Empty),
        }
    }
}

#[derive(Serialize)]
pub struct CellsReport<'a> {
    counts: CellCounts,
    cells: Listing<Cell<'a>>,
}

/// Counts cover every cell; only the listing is filtered.
pub fn report(
    store: &SequenceStore,
    filter: CellFilter,
    group_by: Option<Grouping>,
) -> CellsReport<'_> {
    let mut cells = store.cells();
    let counts = cells.iter().collect();
    cells.retain(|cell| filter.admits(cell.health));
    CellsReport {
        counts,
        cells: Listing::new(cells, group_by),
    }
}
