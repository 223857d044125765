use super::EndDate;
use time::{Date, Duration};

/// How far ahead of its end date an authorization starts being flagged.
pub const EXPIRY_WARNING: Duration = Duration::days(30);

/// The standing of a single authorization on a given day.
///
/// Variants are ordered by severity, so the worst status of a group is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Status {
    /// Usable, and not ending within [`EXPIRY_WARNING`]
    Active,
    /// Usable, but ending within [`EXPIRY_WARNING`]
    Expiring,
    /// Past its end date or deactivated
    Expired,
}

impl Status {
    /// Classifies an authorization against `today`.
    ///
    /// Deactivation wins over everything, including the no-expiry sentinel. A
    /// bounded authorization ending today is still usable (and therefore expiring).
    pub fn classify(end_date: EndDate, active: bool, today: Date) -> Self {
        if !active {
            return Self::Expired;
        }
        match end_date {
            EndDate::NoExpiry => Self::Active,
            EndDate::On(end) if end < today => Self::Expired,
            EndDate::On(end) if end - today < EXPIRY_WARNING => Self::Expiring,
            EndDate::On(_) => Self::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 02 - 25);

    #[test]
    fn inactive_overrides_sentinel() {
        assert_eq!(
            Status::classify(EndDate::NoExpiry, false, TODAY),
            Status::Expired
        );
    }

    #[test]
    fn warning_window_boundaries() {
        let on = |d| EndDate::On(d);
        assert_eq!(Status::classify(on(TODAY), true, TODAY), Status::Expiring);
        assert_eq!(
            Status::classify(on(date!(2026 - 03 - 26)), true, TODAY),
            Status::Expiring
        );
        assert_eq!(
            Status::classify(on(date!(2026 - 03 - 27)), true, TODAY),
            Status::Active
        );
        assert_eq!(
            Status::classify(on(date!(2026 - 02 - 24)), true, TODAY),
            Status::Expired
        );
    }

    #[test]
    fn severity_order() {
        assert!(Status::Active < Status::Expiring);
        assert!(Status::Expiring < Status::Expired);
    }
}
