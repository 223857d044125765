/// A bounded authorization volume, in gallons.
///
/// The remaining amount only exists alongside the authorized amount, so the pair
/// travels together; an uncapped authorization has no `Volume` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Volume {
    /// Gallons granted per renewal period
    pub authorized: u64,
    /// Gallons still available in the current period
    pub remaining: u64,
}

impl Volume {
    /// Creates a volume without checking `remaining <= authorized`.
    ///
    /// Intended for literal data; untrusted input goes through [`Volume::try_new`].
    pub const fn new(authorized: u64, remaining: u64) -> Self {
        Self {
            authorized,
            remaining,
        }
    }

    /// Creates a volume, rejecting a remaining amount above the authorized amount
    pub fn try_new(authorized: u64, remaining: u64) -> Result<Self, VolumeError> {
        let volume = Self::new(authorized, remaining);
        volume.validate()?;
        Ok(volume)
    }

    /// Checks `remaining <= authorized`
    pub fn validate(&self) -> Result<(), VolumeError> {
        if self.remaining > self.authorized {
            Err(VolumeError::Overdrawn {
                authorized: self.authorized,
                remaining: self.remaining,
            })
        } else {
            Ok(())
        }
    }

    /// Remaining volume as a percentage of the authorized volume; zero when nothing is authorized.
    pub fn fill_percent(&self) -> f64 {
        if self.authorized == 0 {
            0.0
        } else {
            self.remaining as f64 * 100.0 / self.authorized as f64
        }
    }

    /// Coarse fill classification for display
    pub fn fill_level(&self) -> FillLevel {
        let percent = self.fill_percent();
        if percent <= 10.0 {
            FillLevel::Low
        } else if percent <= 25.0 {
            FillLevel::Reduced
        } else {
            FillLevel::Normal
        }
    }

    /// Near depletion: at most 10% of a non-zero authorization remains.
    pub fn is_depleted(&self) -> bool {
        // integer form of remaining / authorized <= 0.10
        self.authorized > 0 && self.remaining.saturating_mul(10) <= self.authorized
    }
}

/// How full a bounded volume is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FillLevel {
    /// 10% or less remains
    Low,
    /// Between 10% and 25% remains
    Reduced,
    /// More than 25% remains
    Normal,
}

/// Errors for inconsistent volume figures
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VolumeError {
    /// More remains than was ever authorized
    #[error("remaining volume {remaining} exceeds authorized volume {authorized}")]
    Overdrawn {
        /// The authorized amount
        authorized: u64,
        /// The offending remaining amount
        remaining: u64,
    },
}
