use authseq_core::{
    SequenceStore,
    models::{AuthorizationRecord, GroupKey, RecordError, RecordId},
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, event};

mod config;
pub use config::{AppConfig, CatalogConfig, ClockConfig};

mod io;
pub use io::{IOArgs, PathOrStd};

mod commands;
pub use commands::{CellFilter, Commands, Grouping, LaneFilter};

// Global options, then which report to produce
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to configuration file.
    #[arg(short, long, global = true, env = "AUTHSEQ_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub io: IOArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        let mut store = open_store(&config, self.io.records()?)?;
        let output = self.io.write()?;
        self.command.render(&mut store, output)
    }
}

/// Builds the session store under the configured catalog and reference day
pub fn open_store(
    config: &AppConfig,
    records: Vec<AuthorizationRecord>,
) -> Result<SequenceStore, CliError> {
    let today = config.clock.today();
    event!(Level::DEBUG, %today, "classifying statuses");
    Ok(SequenceStore::new(records, config.catalog.catalog(), today)?)
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Rejected input: {0}")]
    Records(#[from] RecordError),
    #[error("No priority stack {0}")]
    UnknownStack(GroupKey),
    #[error("Stack {key} has no rank {rank} (depth {depth})")]
    UnknownRank {
        key: GroupKey,
        rank: u32,
        depth: usize,
    },
    #[error("No record with id {0}")]
    UnknownRecord(RecordId),
}
