use super::{Authorization, AuthorizationRecord, GroupKey, LocationId, RecordId, Status};
use time::Date;

/// A loaded record with its identity, display name, status and rank.
///
/// The slot fields (`id`, location, product and `sequence`) never change after
/// loading. The `authorization` and `status` describe whichever supplier
/// currently occupies the slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct EnrichedRecord {
    /// Stable identity, the 1-based position in the loaded list
    pub id: RecordId,
    /// Display name of the terminal
    pub location: String,
    /// The terminal
    pub location_id: LocationId,
    /// Short product code
    pub product_code: String,
    /// Resolved long product name
    pub product_name: String,
    /// Resolved abbreviated product name, for tight layouts
    pub short_name: String,
    /// 1-based rank within the priority stack
    pub sequence: u32,
    /// Standing of the occupying authorization
    pub status: Status,
    /// Terms of the occupying supplier
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub authorization: Authorization,
}

impl EnrichedRecord {
    /// The priority stack this record belongs to
    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.location_id, self.product_code.clone())
    }

    /// Whether this record belongs to `key`, without allocating
    pub fn is_in(&self, key: &GroupKey) -> bool {
        self.location_id == key.location_id && self.product_code == key.product_code
    }

    /// Re-derives the status against a new reference day
    pub fn refresh_status(&mut self, today: Date) {
        self.status = Status::classify(
            self.authorization.end_date,
            self.authorization.active,
            today,
        );
    }

    /// Drops the derived fields, recovering the raw record
    pub fn into_raw(self) -> AuthorizationRecord {
        AuthorizationRecord {
            location: self.location,
            location_id: self.location_id,
            product_code: self.product_code,
            authorization: self.authorization,
        }
    }
}
