//! Clock oracle for date and time reads.
//!
//! The engine never reads the wall clock directly. Combat history bucketing,
//! boss expiry checks, and achievement unlock stamps all go through
//! [`ClockOracle`], so tests can pin time to a fixed instant and replays stay
//! deterministic.

use chrono::{DateTime, NaiveDate, Utc};

/// Clock oracle supplying the current instant and calendar day.
pub trait ClockOracle: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date.
    ///
    /// Used for damage-history bucketing and rollover gating.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation for hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests and replays.
///
/// Always returns the instant it was constructed with.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a fixed clock pinned to `instant`.
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Convenience constructor from a date at midnight UTC.
    ///
    /// Returns `None` if the component values do not form a valid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let instant = date.and_hms_opt(0, 0, 0)?.and_utc();
        Some(Self { instant })
    }
}

impl ClockOracle for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
