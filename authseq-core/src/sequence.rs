use crate::models::{AuthorizationRecord, EnrichedRecord, GroupKey, ProductCatalog, RecordId, Status};
use rustc_hash::FxHashMap;
use time::Date;

/// Enriches raw records in arrival order.
///
/// Each record gets its 1-based overall position as `id`, its long and short
/// product names, its status as of `today`, and the next rank in its priority stack.
/// Within every stack the ranks come out as exactly `1..=N`, in arrival order.
pub fn assign_sequences<I>(records: I, catalog: &ProductCatalog, today: Date) -> Vec<EnrichedRecord>
where
    I: IntoIterator<Item = AuthorizationRecord>,
{
    let mut counters = FxHashMap::<GroupKey, u32>::default();

    records
        .into_iter()
        .zip(1..)
        .map(|(record, id)| {
            let counter = counters.entry(record.key()).or_default();
            *counter += 1;

            let status = Status::classify(
                record.authorization.end_date,
                record.authorization.active,
                today,
            );

            EnrichedRecord {
                id: RecordId(id),
                product_name: catalog.long_name(&record.product_code).to_owned(),
                short_name: catalog.short_name(&record.product_code).to_owned(),
                sequence: *counter,
                status,
                location: record.location,
                location_id: record.location_id,
                product_code: record.product_code,
                authorization: record.authorization,
            }
        })
        .collect()
}
