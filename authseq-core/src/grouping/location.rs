use super::{bucket, bucket_stacks};
use crate::models::{EnrichedRecord, LocationId, Map};

/// All priority stacks at one terminal, keyed by product code.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct LocationGroup<'a> {
    /// The terminal
    pub location_id: LocationId,
    /// Display name of the terminal
    pub location: &'a str,
    /// Stacks by product code, each ordered by rank
    pub products: Map<&'a str, Vec<&'a EnrichedRecord>>,
}

impl<'a> LocationGroup<'a> {
    /// Every record at this terminal, product by product
    pub fn records(&self) -> impl Iterator<Item = &'a EnrichedRecord> + '_ {
        self.products.values().flatten().copied()
    }
}

/// All priority stacks for one product, keyed by terminal.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ProductGroup<'a> {
    /// The product code
    pub product_code: &'a str,
    /// Resolved product name
    pub product_name: &'a str,
    /// Stacks by terminal, each ordered by rank
    pub locations: Map<LocationId, Vec<&'a EnrichedRecord>>,
}

/// Terminal → product → stack, the primary grid layout.
pub fn by_location(records: &[EnrichedRecord]) -> Vec<LocationGroup<'_>> {
    bucket(records, |record| record.location_id)
        .into_iter()
        .map(|(location_id, members)| LocationGroup {
            location_id,
            location: members.first().map_or("", |record| record.location.as_str()),
            products: bucket_stacks(members, |record| record.product_code.as_str()),
        })
        .collect()
}

/// Product → terminal → stack, the alternate grid layout.
pub fn by_product(records: &[EnrichedRecord]) -> Vec<ProductGroup<'_>> {
    bucket(records, |record| record.product_code.as_str())
        .into_iter()
        .map(|(product_code, members)| ProductGroup {
            product_code,
            product_name: members
                .first()
                .map_or(product_code, |record| record.product_name.as_str()),
            locations: bucket_stacks(members, |record| record.location_id),
        })
        .collect()
}
