use crate::CliError;
use authseq_core::{
    SequenceStore,
    models::{GroupKey, RecordId},
};
use std::io::Write;
use tracing::{Level, event};

// The library treats unknown stacks and records as no-ops; here they are user errors.
pub fn by_rank(
    store: &mut SequenceStore,
    key: &GroupKey,
    from: u32,
    to: u32,
) -> Result<(), CliError> {
    let depth = store.stack(key).len();
    if depth == 0 {
        return Err(CliError::UnknownStack(key.clone()));
    }
    if from == 0 || from as usize > depth {
        return Err(CliError::UnknownRank {
            key: key.clone(),
            rank: from,
            depth,
        });
    }
    store.reorder(key, from, to);
    event!(Level::INFO, %key, from, to, "reordered stack");
    Ok(())
}

/// Returns the stack the record belongs to
pub fn by_id(store: &mut SequenceStore, id: RecordId, to: u32) -> Result<GroupKey, CliError> {
    let key = store
        .records()
        .iter()
        .find(|record| record.id == id)
        .map(|record| record.key())
        .ok_or(CliError::UnknownRecord(id))?;
    store.move_record(id, to);
    event!(Level::INFO, %key, %id, to, "moved record");
    Ok(key)
}

pub fn write<W: Write>(
    store: &SequenceStore,
    key: &GroupKey,
    group_only: bool,
    output: W,
) -> anyhow::Result<()> {
    if group_only {
        serde_json::to_writer_pretty(output, &store.stack(key))?;
    } else {
        serde_json::to_writer_pretty(output, store.records())?;
    }
    Ok(())
}
