//! Date and time-range selection widgets for [`egui`](https://github.com/emilk/egui).
//!
//! This crate provides the pieces of a "schedule a meeting" flow:
//!
//! - [`CalendarView`]: a month calendar with prev/next navigation, a year
//!   picker and single-day selection.
//! - [`TimeDial`]: a circular clock-face dial that snaps clicks to one of the
//!   48 half-hour slots of the day.
//! - [`TimePickerView`]: start and end dials plus quick-duration shortcuts.
//! - [`DateTimePicker`]: the two views behind a Date/Time tab toggle, with a
//!   selection summary and confirm/cancel actions.
//!
//! The widgets borrow their selection, so the caller always holds the chosen
//! date and time range:
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let mut selected: Option<chrono::NaiveDate> = None;
//! ui.add(egui_schedule::CalendarView::new(&mut selected));
//! # });
//! ```
//!
//! Durations are always derived from the start and end slots, never stored:
//! an end at or before its start is read as rolling past midnight, so a range
//! with equal start and end spans a full 24 hours. See [`duration_hours`].

#![allow(clippy::float_cmp)]
#![allow(clippy::manual_range_contains)]
#![forbid(unsafe_code)]

mod calendar;
mod picker;
mod timeslot;

pub use crate::calendar::{
    days_in_month, month_grid, month_name, CalendarCell, CalendarView, YearMonth, DAY_NAMES,
};
pub use crate::picker::{ActiveView, DateTimePicker, PickerEvent, Selection};
pub use crate::timeslot::{
    duration_hours, marker_angle, slot_index_at, TimeDial, TimePickerView, TimeRange, TimeSlot,
    SLOT_COUNT,
};
