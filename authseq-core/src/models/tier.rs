use std::fmt;

/// The renewal cadence of an authorization.
///
/// Only the periodic tiers carry a bounded volume; `Unlimited` and `SelfSupply`
/// draw without a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Renews every week
    Weekly,
    /// Renews every month
    Monthly,
    /// Renews every day
    Daily,
    /// No volume cap
    Unlimited,
    /// The terminal operator's own product
    #[cfg_attr(feature = "serde", serde(rename = "Self"))]
    SelfSupply,
}

impl Tier {
    /// Whether authorizations of this tier are expected to carry a volume cap
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Weekly | Self::Monthly | Self::Daily)
    }

    /// The label used on the wire and in reports
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Daily => "Daily",
            Self::Unlimited => "Unlimited",
            Self::SelfSupply => "Self",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
