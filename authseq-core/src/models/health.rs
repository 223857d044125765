use super::{EnrichedRecord, Status};

/// A summary of the worst condition among a group's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Health {
    /// The group has no members
    Empty,
    /// Nothing needs attention
    Healthy,
    /// At least one member is expiring
    Warning,
    /// At least one member is unusable or about to run dry
    Critical,
}

/// A rule for rolling member records up into a [`Health`].
///
/// Heat-map cells and terminal lanes roll up under different rules:
/// [`CellHealth`] and [`LaneHealth`] respectively.
pub trait HealthPolicy {
    /// Whether this member alone makes its group critical
    fn is_critical(record: &EnrichedRecord) -> bool;

    /// Rolls `records` up into a single health value
    fn assess<'a, I>(records: I) -> Health
    where
        I: IntoIterator<Item = &'a EnrichedRecord>,
    {
        let mut health = Health::Empty;
        for record in records {
            if Self::is_critical(record) {
                return Health::Critical;
            }
            let this = if record.status == Status::Expiring {
                Health::Warning
            } else {
                Health::Healthy
            };
            health = health.max(this);
        }
        health
    }
}

/// Heat-map cell policy: expired members and near-depleted volumes are critical.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellHealth;

impl HealthPolicy for CellHealth {
    fn is_critical(record: &EnrichedRecord) -> bool {
        record.status == Status::Expired || record.authorization.is_depleted()
    }
}

/// Terminal lane policy: only status counts, volume is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneHealth;

impl HealthPolicy for LaneHealth {
    fn is_critical(record: &EnrichedRecord) -> bool {
        record.status == Status::Expired
    }
}

/// Member counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthCounts {
    /// Expired members
    pub critical: usize,
    /// Expiring members
    pub expiring: usize,
    /// Active members
    pub healthy: usize,
}

impl<'a> FromIterator<&'a EnrichedRecord> for HealthCounts {
    fn from_iter<I: IntoIterator<Item = &'a EnrichedRecord>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut counts, record| {
                match record.status {
                    Status::Expired => counts.critical += 1,
                    Status::Expiring => counts.expiring += 1,
                    Status::Active => counts.healthy += 1,
                }
                counts
            })
    }
}
