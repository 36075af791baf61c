//! Slot arithmetic for placing work on the visible day.
//!
//! The visible day runs from `day_start_hour` to `day_end_hour` and is cut
//! into fixed-length slots numbered from 1. Start times outside the window
//! are not clamped: a task at 05:00 lands on slot -3 with the default
//! configuration, and presentation decides what to do with it via
//! [`TimelineConfig::is_visible`].

use super::{DayZone, TimelineConfigError};
use chrono::{DateTime, DurationRound, NaiveTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: i32 = 60;

/// Derived placement of an item on the timeline. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelinePosition {
    /// 1-based slot index of the start time.
    pub slot: i32,
    /// Number of slots the item spans; at least 1.
    pub size: i32,
}

impl TimelinePosition {
    /// Last slot covered by the item.
    #[must_use]
    pub const fn last_slot(&self) -> i32 {
        self.slot.saturating_add(self.size).saturating_sub(1)
    }
}

/// Bounds and granularity of the visible day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// First visible hour (slot 1 starts here).
    pub day_start_hour: i32,
    /// End of the visible window (exclusive).
    pub day_end_hour: i32,
    /// Slot length in minutes.
    pub slot_minutes: i32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 6,
            day_end_hour: 18,
            slot_minutes: 15,
        }
    }
}

impl TimelineConfig {
    /// Checks that the window is non-empty and the slot length tiles an hour.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineConfigError`] describing the first violated bound.
    pub fn validate(&self) -> Result<(), TimelineConfigError> {
        for hour in [self.day_start_hour, self.day_end_hour] {
            if !(0..=24).contains(&hour) {
                return Err(TimelineConfigError::HourOutOfRange(hour));
            }
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(TimelineConfigError::EmptyWindow {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }
        if self.slot_minutes <= 0 || MINUTES_PER_HOUR.rem_euclid(self.slot_minutes) != 0 {
            return Err(TimelineConfigError::InvalidSlotLength(self.slot_minutes));
        }
        Ok(())
    }

    /// Number of slots in one hour.
    #[must_use]
    pub fn slots_per_hour(&self) -> i32 {
        MINUTES_PER_HOUR.div_euclid(self.slot_length())
    }

    /// Number of slots in the visible window.
    #[must_use]
    pub fn slots_per_day(&self) -> i32 {
        self.day_end_hour
            .saturating_sub(self.day_start_hour)
            .saturating_mul(self.slots_per_hour())
    }

    /// Slot index of a wall-clock time.
    ///
    /// Saturates rather than overflowing for configurations that were never
    /// validated.
    #[must_use]
    pub fn compute_slot(&self, wall: NaiveTime) -> i32 {
        let hour = clock_component(wall.hour());
        let minute = clock_component(wall.minute());
        hour.saturating_sub(self.day_start_hour)
            .saturating_mul(self.slots_per_hour())
            .saturating_add(minute.div_euclid(self.slot_length()))
            .saturating_add(1)
    }

    /// Number of slots a duration occupies.
    ///
    /// Anything shorter than one slot, including an absent or negative
    /// duration, occupies exactly one. Durations that are not a multiple of
    /// the slot length are truncated.
    #[must_use]
    pub fn compute_size(&self, duration_minutes: Option<i32>) -> i32 {
        let slot = self.slot_length();
        duration_minutes.unwrap_or(0).max(slot).div_euclid(slot)
    }

    /// Position of an item starting at `start` (read in `zone`).
    #[must_use]
    pub fn compute_position(
        &self,
        start: DateTime<Utc>,
        duration_minutes: Option<i32>,
        zone: &DayZone,
    ) -> TimelinePosition {
        TimelinePosition {
            slot: self.compute_slot(zone.wall_time(start).time()),
            size: self.compute_size(duration_minutes),
        }
    }

    /// Whether any part of `position` overlaps the visible window.
    #[must_use]
    pub fn is_visible(&self, position: TimelinePosition) -> bool {
        position.slot <= self.slots_per_day() && position.last_slot() >= 1
    }

    /// Start of the slot after the one containing `now`.
    ///
    /// Returns `None` if `now` cannot be rounded to the slot grid.
    #[must_use]
    pub fn next_slot_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let slot = TimeDelta::minutes(i64::from(self.slot_length()));
        now.duration_trunc(slot)
            .ok()
            .and_then(|aligned| aligned.checked_add_signed(slot))
    }

    // Guards the arithmetic above against an unvalidated zero or negative
    // slot length.
    fn slot_length(&self) -> i32 {
        self.slot_minutes.max(1)
    }
}

fn clock_component(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
