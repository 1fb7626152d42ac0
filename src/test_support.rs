//! Shared fixtures for unit tests.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant for deterministic date assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Creates a clock pinned to the given UTC calendar time.
    ///
    /// Invalid component combinations fall back to the Unix epoch.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .unwrap_or_default();
        Self(instant)
    }

    /// Returns the pinned instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the calendar date of the pinned instant.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns `date` advanced by `days`, saturating at the calendar limit.
#[must_use]
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Returns `date` moved back by `days`, saturating at the calendar limit.
#[must_use]
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}
