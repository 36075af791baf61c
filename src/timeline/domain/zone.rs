//! Local-day arithmetic.
//!
//! Tasks store UTC instants; the timeline and day queries reason in local
//! wall-clock time. [`DayZone`] is the single place where the two meet.

use super::DayWindowError;
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};

/// Time zone used to interpret day boundaries and wall-clock slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayZone {
    /// The host's local time zone.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayZone {
    /// Returns a zone pinned to UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Returns a fixed zone `minutes` east of UTC, or `None` when the offset
    /// is out of range.
    #[must_use]
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::Fixed)
    }

    /// Returns the wall-clock reading of `instant` in this zone.
    #[must_use]
    pub fn wall_time(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// Returns the local calendar date containing `instant`.
    #[must_use]
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.wall_time(instant).date()
    }

    /// Returns the `[midnight, next midnight)` window of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`DayWindowError`] when local midnight does not exist or the
    /// date has no successor.
    pub fn day_window(&self, date: NaiveDate) -> Result<DayWindow, DayWindowError> {
        let next = date
            .succ_opt()
            .ok_or(DayWindowError::DateOverflow(date))?;
        let start = self.midnight(date)?;
        let end = self.midnight(next)?;
        Ok(DayWindow { start, end })
    }

    fn midnight(&self, date: NaiveDate) -> Result<DateTime<Utc>, DayWindowError> {
        let wall = date.and_time(NaiveTime::MIN);
        let resolved = match self {
            Self::Local => earliest_utc(&Local, &wall),
            Self::Fixed(offset) => earliest_utc(offset, &wall),
        };
        resolved.ok_or(DayWindowError::MissingMidnight(date))
    }
}

fn earliest_utc<Tz: TimeZone>(zone: &Tz, wall: &NaiveDateTime) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(wall)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Half-open interval of instants covering one local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// First instant of the day (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant of the following day (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether `instant` falls on this day.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}
