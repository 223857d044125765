use authseq_core::{
    SequenceStore,
    grouping::{GroupBy, Section, Sectioned, sections},
    models::{GroupKey, LocationId, RecordId},
};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;

mod cells;
mod lanes;
mod reorder;
mod stacks;

pub use cells::CellFilter;
pub use lanes::LaneFilter;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Every record with its rank, product name and status
    Records,

    /// Terminal, then product, then priority stack
    Locations,

    /// Product, then terminal, then priority stack
    Products,

    /// One heat-map cell per priority stack, with health tallies
    Cells {
        /// Only list cells of this health
        #[arg(long, default_value = "all")]
        health: CellFilter,

        /// Section the cells by terminal or by product
        #[arg(short, long)]
        group_by: Option<Grouping>,
    },

    /// One swimlane per terminal, with status-only health
    Lanes {
        /// Only report lanes of this health
        #[arg(long, default_value = "all")]
        health: LaneFilter,
    },

    /// A summary per priority stack, for browsing and search
    Stacks {
        /// Case-insensitive match on terminal name or id, product code or product name
        #[arg(short, long)]
        search: Option<String>,

        /// Section the stacks by terminal or by product
        #[arg(short, long)]
        group_by: Option<Grouping>,
    },

    /// Move the supplier at one rank of a stack to another rank
    Reorder {
        /// The terminal id
        #[arg(long)]
        location: u32,

        /// The product code
        #[arg(long)]
        product: String,

        /// The current rank of the supplier to move
        #[arg(long)]
        from: u32,

        /// The rank to move it to (clamped to the stack)
        #[arg(long)]
        to: u32,

        /// Only report the affected stack
        #[arg(long)]
        group_only: bool,
    },

    /// Move the supplier in one record to another rank of its stack
    Move {
        /// The record id
        #[arg(long)]
        id: u32,

        /// The rank to move it to (clamped to the stack)
        #[arg(long)]
        to: u32,

        /// Only report the affected stack
        #[arg(long)]
        group_only: bool,
    },
}

impl Commands {
    /// Runs the command against `store` and writes its report as pretty JSON
    pub fn render<W: Write>(self, store: &mut SequenceStore, output: W) -> anyhow::Result<()> {
        match self {
            Self::Records => serde_json::to_writer_pretty(output, store.records())?,
            Self::Locations => serde_json::to_writer_pretty(output, &store.by_location())?,
            Self::Products => serde_json::to_writer_pretty(output, &store.by_product())?,
            Self::Cells { health, group_by } => {
                serde_json::to_writer_pretty(output, &cells::report(store, health, group_by))?
            }
            Self::Lanes { health } => {
                serde_json::to_writer_pretty(output, &lanes::report(store, health))?
            }
            Self::Stacks { search, group_by } => serde_json::to_writer_pretty(
                output,
                &stacks::report(store, search.as_deref(), group_by),
            )?,
            Self::Reorder {
                location,
                product,
                from,
                to,
                group_only,
            } => {
                let key = GroupKey::new(LocationId(location), product);
                reorder::by_rank(store, &key, from, to)?;
                reorder::write(store, &key, group_only, output)?
            }
            Self::Move { id, to, group_only } => {
                let key = reorder::by_id(store, RecordId(id), to)?;
                reorder::write(store, &key, group_only, output)?
            }
        }
        Ok(())
    }
}

/// The section headings a list report can be split under
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Grouping {
    Location,
    Product,
}

impl From<Grouping> for GroupBy {
    fn from(value: Grouping) -> Self {
        match value {
            Grouping::Location => Self::Location,
            Grouping::Product => Self::Product,
        }
    }
}

// A list report, sectioned only when asked
#[derive(Serialize)]
#[serde(untagged)]
enum Listing<T> {
    Flat(Vec<T>),
    Sectioned(Vec<Section<T>>),
}

impl<T: Sectioned> Listing<T> {
    fn new(items: Vec<T>, grouping: Option<Grouping>) -> Self {
        match grouping {
            Some(grouping) => Self::Sectioned(sections(items, grouping.into())),
            None => Self::Flat(items),
        }
    }
}
