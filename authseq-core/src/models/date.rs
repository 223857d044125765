use std::{fmt, str::FromStr};
use time::{Date, format_description::BorrowedFormatItem, macros::date, macros::format_description};

/// The literal end date that means "never expires".
pub const NO_EXPIRY: &str = "12/31/2999";

const NO_EXPIRY_DATE: Date = date!(2999 - 12 - 31);

const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[month]/[day]/[year]");

/// The last day an authorization may be drawn against.
///
/// On the wire this is an `MM/DD/YYYY` string, with [`NO_EXPIRY`] reserved as
/// the open-ended sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum EndDate {
    /// The authorization does not expire
    NoExpiry,
    /// The authorization ends on this calendar date
    On(Date),
}

impl EndDate {
    /// The calendar date, if bounded
    pub fn date(&self) -> Option<Date> {
        match self {
            Self::NoExpiry => None,
            Self::On(date) => Some(*date),
        }
    }
}

impl From<Date> for EndDate {
    fn from(value: Date) -> Self {
        if value == NO_EXPIRY_DATE {
            Self::NoExpiry
        } else {
            Self::On(value)
        }
    }
}

impl FromStr for EndDate {
    type Err = EndDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == NO_EXPIRY {
            return Ok(Self::NoExpiry);
        }
        Date::parse(s, FORMAT)
            .map(Self::from)
            .map_err(|source| EndDateError::Malformed {
                value: s.to_owned(),
                source,
            })
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExpiry => f.write_str(NO_EXPIRY),
            Self::On(date) => write!(
                f,
                "{:02}/{:02}/{:04}",
                u8::from(date.month()),
                date.day(),
                date.year()
            ),
        }
    }
}

/// Errors that can occur when reading an end date
#[derive(Debug, thiserror::Error)]
pub enum EndDateError {
    /// The value is not a valid `MM/DD/YYYY` calendar date
    #[error("malformed end date {value:?}, expected MM/DD/YYYY")]
    Malformed {
        /// The rejected input
        value: String,
        /// The underlying parse failure
        #[source]
        source: time::error::Parse,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_to_no_expiry() {
        assert_eq!("12/31/2999".parse::<EndDate>().unwrap(), EndDate::NoExpiry);
    }

    #[test]
    fn sentinel_date_normalizes() {
        assert_eq!(EndDate::from(date!(2999 - 12 - 31)), EndDate::NoExpiry);
    }

    #[test]
    fn parses_month_day_year() {
        let parsed: EndDate = "01/19/2026".parse().unwrap();
        assert_eq!(parsed, EndDate::On(date!(2026 - 01 - 19)));
        assert_eq!(parsed.to_string(), "01/19/2026");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["2026-01-19", "13/01/2026", "02/30/2026", "", "soon"] {
            assert!(bad.parse::<EndDate>().is_err(), "{bad} should not parse");
        }
    }
}
