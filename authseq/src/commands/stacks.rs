use super::{Grouping, Listing};
use authseq_core::{SequenceStore, grouping::StackSummary};

pub fn report<'a>(
    store: &'a SequenceStore,
    search: Option<&str>,
    group_by: Option<Grouping>,
) -> Listing<StackSummary<'a>> {
    let mut stacks = store.stacks();
    if let Some(query) = search {
        stacks.retain(|stack| stack.matches(query));
    }
    Listing::new(stacks, group_by)
}
