//! Wall-clock hour to time-of-day tag.

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::model::TimeOfDay;

/// Resolve an hour of the day (0-23) to its tag.
///
/// Morning is 5-11, afternoon 12-16, evening 17-21; everything else,
/// including out-of-range input, is night. Never returns `Anytime`.
pub fn time_of_day_for_hour(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=21 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Resolve the tag for a point in time, using that value's own time zone.
pub fn time_of_day_at<Tz: TimeZone>(at: &DateTime<Tz>) -> TimeOfDay {
    time_of_day_for_hour(at.hour())
}

/// Tag for the local clock right now.
pub fn current_time_of_day() -> TimeOfDay {
    time_of_day_at(&Local::now())
}

/// Remembers the last resolved tag and reports changes.
///
/// Meant to be polled about once a minute by a front end that re-renders
/// its suggestions when the part of the day rolls over.
#[derive(Debug, Clone, Copy)]
pub struct TimeOfDayWatcher {
    current: TimeOfDay,
}

impl TimeOfDayWatcher {
    pub fn new(initial: TimeOfDay) -> Self {
        Self { current: initial }
    }

    pub fn starting_at<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self::new(time_of_day_at(at))
    }

    pub fn current(&self) -> TimeOfDay {
        self.current
    }

    /// Re-resolve at `now`. Returns the new tag only if it differs from the
    /// previous one.
    pub fn observe<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Option<TimeOfDay> {
        let tag = time_of_day_at(now);
        if tag == self.current {
            return None;
        }
        tracing::debug!(from = %self.current, to = %tag, "time of day changed");
        self.current = tag;
        Some(tag)
    }
}
