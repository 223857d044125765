#![warn(missing_docs)]
//! Supplier authorization priority stacks.
//!
//! Each terminal sells products supplied by several counterparties, tried in a
//! fixed priority order. This crate loads raw authorizations, ranks them into
//! stacks per `(terminal, product)`, classifies their standing against a
//! reference day, rolls them up into the grid, heat-map, lane and master/detail
//! layouts, and re-ranks a stack on request.
//!
//! ```
//! use authseq_core::{SequenceStore, models::{GroupKey, LocationId}};
//! use time::macros::date;
//!
//! let mut store = SequenceStore::from_fixture(date!(2026 - 02 - 25));
//! let key = GroupKey::new(LocationId(201), "A");
//! store.reorder(&key, 3, 1);
//! assert_eq!(store.stack(&key)[0].authorization.supplier, "Foxridge Supply Group");
//! ```

/// Core domain models.
///
/// Raw and enriched records, their identifiers, status and health
/// classifications, and the product catalog. Most of the derivation rules live
/// next to the types they produce.
pub mod models;

/// The built-in authorization dataset.
pub mod fixture;

/// Read-only aggregations: by terminal, by product, heat-map cells, lanes and
/// stack summaries.
pub mod grouping;

/// Rank assignment for freshly loaded records.
pub mod sequence;

pub mod reorder;

mod store;
pub use store::SequenceStore;
