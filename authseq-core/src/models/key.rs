use super::LocationId;
use std::fmt;

/// Identifies one priority stack: a product at a terminal.
///
/// The derived ordering (terminal first, then product code) is the order in
/// which stacks are always reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GroupKey {
    /// The terminal
    pub location_id: LocationId,
    /// The product code
    pub product_code: String,
}

impl GroupKey {
    /// Creates a key from its parts
    pub fn new(location_id: LocationId, product_code: impl Into<String>) -> Self {
        Self {
            location_id,
            product_code: product_code.into(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.location_id, self.product_code)
    }
}
