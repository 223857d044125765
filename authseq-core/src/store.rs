use crate::{
    grouping::{self, Cell, Lane, LocationGroup, ProductGroup, StackSummary},
    models::{
        AuthorizationRecord, EnrichedRecord, GroupKey, Health, LocationId, ProductCatalog,
        RecordError, RecordId,
    },
    reorder, sequence,
};
use time::Date;
use tracing::{Level, event};

/// The canonical, currently-ordered record list for one session.
///
/// The store is the only writer of the list: reads borrow it and re-derive
/// their views on every call, and [`SequenceStore::reorder`] is the only
/// mutation.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    catalog: ProductCatalog,
    today: Date,
    records: Vec<EnrichedRecord>,
}

impl SequenceStore {
    /// Validates and enriches `records`, classifying statuses as of `today`.
    ///
    /// Any inconsistent record rejects the whole load.
    pub fn new(
        records: Vec<AuthorizationRecord>,
        catalog: ProductCatalog,
        today: Date,
    ) -> Result<Self, RecordError> {
        for record in &records {
            record.validate()?;
        }
        let records = sequence::assign_sequences(records, &catalog, today);
        event!(Level::INFO, records = records.len(), %today, "loaded authorizations");
        Ok(Self {
            catalog,
            today,
            records,
        })
    }

    /// The built-in dataset with the standard product catalog
    pub fn from_fixture(today: Date) -> Self {
        Self {
            records: sequence::assign_sequences(
                crate::fixture::load_fixture(),
                &ProductCatalog::standard(),
                today,
            ),
            catalog: ProductCatalog::standard(),
            today,
        }
    }

    /// Every record, in load order
    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    /// The product names used for display
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The day statuses were last classified against
    pub fn today(&self) -> Date {
        self.today
    }

    /// Re-classifies every status against a new reference day
    pub fn refresh(&mut self, today: Date) {
        self.today = today;
        for record in &mut self.records {
            record.refresh_status(today);
        }
        event!(Level::INFO, %today, "refreshed statuses");
    }

    /// Terminal → product → stack
    pub fn by_location(&self) -> Vec<LocationGroup<'_>> {
        grouping::by_location(&self.records)
    }

    /// Product → terminal → stack
    pub fn by_product(&self) -> Vec<ProductGroup<'_>> {
        grouping::by_product(&self.records)
    }

    /// One heat-map cell per populated stack
    pub fn cells(&self) -> Vec<Cell<'_>> {
        grouping::cells(&self.records)
    }

    /// The heat-map cell for `key`, populated or not
    pub fn cell(&self, key: &GroupKey) -> Cell<'_> {
        grouping::cell(&self.records, key)
    }

    /// One lane per terminal
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        grouping::lanes(&self.records)
    }

    /// Status-only health of a terminal; [`Health::Empty`] for an unknown terminal
    pub fn lane_health(&self, location_id: LocationId) -> Health {
        grouping::lane_health(&self.records, location_id)
    }

    /// One summary per stack
    pub fn stacks(&self) -> Vec<StackSummary<'_>> {
        grouping::stacks(&self.records)
    }

    /// The members of a stack, ordered by rank
    pub fn stack(&self, key: &GroupKey) -> Vec<&EnrichedRecord> {
        grouping::stack(&self.records, key)
    }

    /// Moves the supplier at rank `from` of `key` to rank `to`.
    ///
    /// See [`reorder::reorder`] for the exact semantics. Returns the full,
    /// updated record list.
    pub fn reorder(&mut self, key: &GroupKey, from: u32, to: u32) -> &[EnrichedRecord] {
        reorder::reorder_in_place(&mut self.records, key, from, to);
        &self.records
    }

    /// Moves the supplier occupying slot `id` to rank `to` of the same stack.
    pub fn move_record(&mut self, id: RecordId, to: u32) -> &[EnrichedRecord] {
        reorder::move_record_in_place(&mut self.records, id, to);
        &self.records
    }
}
