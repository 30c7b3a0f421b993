//! Lookback window value object

use std::fmt;

use crate::domain::error::InvalidLookbackError;

/// Default trailing window for the list query (10 days)
pub const DEFAULT_LOOKBACK_DAYS: u32 = 10;

/// Value object representing the trailing time window a transcript
/// search covers. Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lookback {
    days: u32,
}

impl Lookback {
    /// Create a Lookback spanning the given number of whole days.
    /// A zero-day window would make every search trivially empty, so it
    /// is rejected.
    pub fn from_days(days: u32) -> Result<Self, InvalidLookbackError> {
        if days == 0 {
            return Err(InvalidLookbackError { days });
        }
        Ok(Self { days })
    }

    /// Default trailing window (10 days)
    pub const fn default_lookback() -> Self {
        Self {
            days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// One-day window, the smallest valid lookback
    pub const fn one_day() -> Self {
        Self { days: 1 }
    }

    /// Window length in whole days
    pub const fn days(&self) -> u32 {
        self.days
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::default_lookback()
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.days)
        }
    }
}
