//! Half-hour time slots, time ranges and wraparound durations.

mod dial;
mod view;

pub use dial::{marker_angle, slot_index_at, TimeDial};
pub use view::TimePickerView;

use std::fmt;

/// Number of selectable times per day: every half hour.
pub const SLOT_COUNT: usize = 48;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// One of the 48 fixed half-hour times of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a slot if the values are on the half-hour grid.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && (minute == 0 || minute == 30)).then_some(Self { hour, minute })
    }

    /// The slot at the given table index, wrapping modulo [`SLOT_COUNT`].
    pub fn from_index(index: usize) -> Self {
        let index = index % SLOT_COUNT;
        Self {
            hour: (index / 2) as u8,
            minute: if index % 2 == 0 { 0 } else { 30 },
        }
    }

    /// Position of this slot in the ascending table, `0..SLOT_COUNT`.
    pub fn index(self) -> usize {
        self.hour as usize * 2 + usize::from(self.minute == 30)
    }

    /// All slots of the day in ascending order, `00:00` through `23:30`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT).map(Self::from_index)
    }

    /// Parses a `"HH:MM"` label, returning `None` if it is not in the table.
    pub fn from_label(label: &str) -> Option<Self> {
        let (hour, minute) = label.split_once(':')?;
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn total_minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Moves by whole minutes on the rolling 24-hour clock, snapping to the
    /// half-hour grid.
    pub fn add_minutes(self, minutes: i32) -> Self {
        let total = (self.total_minutes() as i32 + minutes).rem_euclid(MINUTES_PER_DAY);
        Self::from_index((total / 30) as usize)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Hours elapsed from `start` to `end` on a rolling 24-hour clock, rounded to
/// the nearest half hour.
///
/// An end at or before its start is read as crossing midnight into the next
/// day, so equal start and end means a full 24 hours, never zero. This is an
/// intentional policy: a meeting's end is always strictly after its start.
pub fn duration_hours(start: TimeSlot, end: TimeSlot) -> f32 {
    let mut diff = end.total_minutes() as i32 - start.total_minutes() as i32;
    if diff <= 0 {
        diff += MINUTES_PER_DAY;
    }
    (diff as f32 / 60.0 * 2.0).round() / 2.0
}

/// A start and end slot, as picked in [`TimePickerView`].
///
/// The duration is always derived from the two slots via [`duration_hours`],
/// so it can never go stale relative to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TimeRange {
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl Default for TimeRange {
    fn default() -> Self {
        // Midnight to 03:00, a three hour meeting.
        Self {
            start: TimeSlot::MIDNIGHT,
            end: TimeSlot { hour: 3, minute: 0 },
        }
    }
}

impl TimeRange {
    pub fn new(start: TimeSlot, end: TimeSlot) -> Self {
        Self { start, end }
    }

    /// Builds a range from `"HH:MM"` labels.
    ///
    /// A label that is not on the half-hour grid keeps the corresponding
    /// default slot; a warning is logged instead of failing.
    pub fn from_labels(start: &str, end: &str) -> Self {
        let default = Self::default();
        let parse = |label: &str, fallback: TimeSlot| {
            TimeSlot::from_label(label).unwrap_or_else(|| {
                log::warn!("time label {label:?} is not on the half-hour grid");
                fallback
            })
        };
        Self {
            start: parse(start, default.start),
            end: parse(end, default.end),
        }
    }

    pub fn duration_hours(self) -> f32 {
        duration_hours(self.start, self.end)
    }

    /// Same start, with the end derived as `start + hours`, wrapping past
    /// midnight. This is what the quick-duration shortcuts apply.
    pub fn with_duration(self, hours: f32) -> Self {
        Self {
            start: self.start,
            end: self.start.add_minutes((hours * 60.0).round() as i32),
        }
    }
}

// ----------------------------------------------------------------------------
