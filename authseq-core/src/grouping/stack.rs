use super::{GroupBy, Sectioned, bucket_stacks, location_label, product_label};
use crate::models::{EnrichedRecord, GroupKey, Status};

/// A master-list entry describing one priority stack.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct StackSummary<'a> {
    /// The stack
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub key: GroupKey,
    /// Display name of the terminal
    pub location: &'a str,
    /// Resolved product name
    pub product_name: &'a str,
    /// Highest rank in the stack
    pub sequence_depth: u32,
    /// Worst status among the members
    pub worst_status: Status,
}

impl StackSummary<'_> {
    /// Case-insensitive match on terminal name or id, product code or product name.
    ///
    /// A blank query matches everything; otherwise the query is used as typed,
    /// surrounding spaces included.
    pub fn matches(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        let location_id = self.key.location_id.to_string();
        let fields: [&str; 4] = [
            self.location,
            location_id.as_str(),
            self.key.product_code.as_str(),
            self.product_name,
        ];
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl Sectioned for StackSummary<'_> {
    fn section_label(&self, by: GroupBy) -> String {
        match by {
            GroupBy::Location => format!("{} {}", self.key.location_id, self.location),
            GroupBy::Product => format!("{} — {}", self.key.product_code, self.product_name),
        }
    }
}

/// One summary per stack, in key order.
pub fn stacks(records: &[EnrichedRecord]) -> Vec<StackSummary<'_>> {
    bucket_stacks(records, EnrichedRecord::key)
        .into_iter()
        .filter_map(|(key, members)| {
            let head = members.first()?;
            Some(StackSummary {
                location: head.location.as_str(),
                product_name: head.product_name.as_str(),
                sequence_depth: members.iter().map(|r| r.sequence).max().unwrap_or(0),
                worst_status: members.iter().map(|r| r.status).max().unwrap_or(Status::Active),
                key,
            })
        })
        .collect()
}

/// The members of one stack, ordered by rank: the detail pane of the split view.
pub fn stack<'a>(records: &'a [EnrichedRecord], key: &GroupKey) -> Vec<&'a EnrichedRecord> {
    let mut members: Vec<_> = records.iter().filter(|record| record.is_in(key)).collect();
    members.sort_by_key(|record| record.sequence);
    members
}
