use super::{EndDate, FillLevel, GroupKey, LocationId, SupplierId, Tier, Volume, VolumeError};

/// The supplier-side terms of an authorization.
///
/// This is the part of a record that belongs to the supplier rather than to the
/// slot it occupies in a priority stack; reordering a stack moves these terms
/// between slots.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AuthorizationDto", into = "AuthorizationDto")
)]
pub struct Authorization {
    /// Display name of the selling counterparty
    pub supplier: String,
    /// Identity of the selling counterparty
    pub supplier_id: SupplierId,
    /// Renewal cadence
    pub tier: Tier,
    /// Authorized and remaining gallons, when capped
    pub volume: Option<Volume>,
    /// Gallons restored at each renewal, when known
    pub renewal_volume: Option<u64>,
    /// Last day of the authorization
    pub end_date: EndDate,
    /// Cleared when the authorization has been deactivated externally
    pub active: bool,
}

impl Authorization {
    /// Checks the volume figures for consistency
    pub fn validate(&self) -> Result<(), RecordError> {
        if let Some(volume) = &self.volume {
            volume.validate()?;
        }
        Ok(())
    }

    /// Whether this authorization is close to running dry
    pub fn is_depleted(&self) -> bool {
        self.volume.is_some_and(|volume| volume.is_depleted())
    }

    /// The first word of the supplier name, for compact listings
    pub fn supplier_short(&self) -> &str {
        self.supplier.split_whitespace().next().unwrap_or(&self.supplier)
    }
}

/// A raw authorization as supplied by the data source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AuthorizationRecord {
    /// Display name of the terminal
    pub location: String,
    /// The terminal
    pub location_id: LocationId,
    /// Short product code, e.g. `"A"` or `"B99"`
    pub product_code: String,
    /// Supplier terms
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub authorization: Authorization,
}

impl AuthorizationRecord {
    /// The priority stack this record competes in
    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.location_id, self.product_code.clone())
    }

    /// Checks the record for consistency
    pub fn validate(&self) -> Result<(), RecordError> {
        self.authorization.validate()
    }
}

/// Wire form of [`Authorization`]; deserializing always goes through validation.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AuthorizationDto {
    /// See [`Authorization::supplier`]
    pub supplier: String,
    /// See [`Authorization::supplier_id`]
    pub supplier_id: SupplierId,
    /// See [`Authorization::tier`]
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tier: Tier,
    /// Authorized gallons; present iff `remaining_vol` is
    #[cfg_attr(feature = "serde", serde(default))]
    pub auth_vol: Option<u64>,
    /// Remaining gallons; present iff `auth_vol` is
    #[cfg_attr(feature = "serde", serde(default))]
    pub remaining_vol: Option<u64>,
    /// See [`Authorization::renewal_volume`]
    #[cfg_attr(feature = "serde", serde(default))]
    pub renewal_vol: Option<u64>,
    /// Remaining as a percentage of authorized; written, never read
    #[cfg_attr(
        feature = "serde",
        serde(skip_deserializing, skip_serializing_if = "Option::is_none")
    )]
    pub fill_percent: Option<f64>,
    /// See [`Volume::fill_level`]; written, never read
    #[cfg_attr(
        feature = "serde",
        serde(skip_deserializing, skip_serializing_if = "Option::is_none")
    )]
    pub fill_level: Option<FillLevel>,
    /// See [`Authorization::end_date`]
    pub end_date: EndDate,
    /// See [`Authorization::active`]
    pub active: bool,
}

impl TryFrom<AuthorizationDto> for Authorization {
    type Error = RecordError;

    fn try_from(value: AuthorizationDto) -> Result<Self, Self::Error> {
        let volume = match (value.auth_vol, value.remaining_vol) {
            (Some(authorized), Some(remaining)) => Some(Volume::try_new(authorized, remaining)?),
            (None, None) => None,
            (Some(_), None) => {
                return Err(RecordError::MissingRemaining {
                    supplier: value.supplier,
                });
            }
            (None, Some(_)) => {
                return Err(RecordError::MissingAuthorized {
                    supplier: value.supplier,
                });
            }
        };

        Ok(Self {
            supplier: value.supplier,
            supplier_id: value.supplier_id,
            tier: value.tier,
            volume,
            renewal_volume: value.renewal_vol,
            end_date: value.end_date,
            active: value.active,
        })
    }
}

impl From<Authorization> for AuthorizationDto {
    fn from(value: Authorization) -> Self {
        Self {
            supplier: value.supplier,
            supplier_id: value.supplier_id,
            tier: value.tier,
            auth_vol: value.volume.map(|v| v.authorized),
            remaining_vol: value.volume.map(|v| v.remaining),
            renewal_vol: value.renewal_volume,
            fill_percent: value.volume.map(|v| v.fill_percent()),
            fill_level: value.volume.map(|v| v.fill_level()),
            end_date: value.end_date,
            active: value.active,
        }
    }
}

/// Errors for authorization records that cannot be loaded
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// An authorized volume was given without a remaining volume
    #[error("authorization from {supplier} has an authorized volume but no remaining volume")]
    MissingRemaining {
        /// The supplier named on the record
        supplier: String,
    },
    /// A remaining volume was given without an authorized volume
    #[error("authorization from {supplier} has a remaining volume but no authorized volume")]
    MissingAuthorized {
        /// The supplier named on the record
        supplier: String,
    },
    /// The volume figures contradict each other
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

#[cfg(test)]
mod tests {
    use crate::fixture::load_fixture;
    use time::macros::date;

    #[test]
    fn short_supplier_is_first_word() {
        let fixture = load_fixture();
        assert_eq!(fixture[0].authorization.supplier_short(), "Lancer");
        assert_eq!(fixture[0].authorization.end_date.date(), Some(date!(2026 - 05 - 31)));
        assert_eq!(fixture[1].authorization.end_date.date(), None);
    }

    #[test]
    fn depletion_needs_a_volume() {
        let fixture = load_fixture();
        // Lancer self-supplies with no cap, Baxter has nothing left
        assert!(!fixture[0].authorization.is_depleted());
        assert!(fixture[11].authorization.is_depleted());
    }
}
