//! Month-grid model backing [`CalendarView`].

mod view;

pub use view::CalendarView;

use chrono::{Datelike as _, NaiveDate};

/// Column headers of the day grid, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One position in a month's 7-column day grid.
///
/// A month always starts with as many [`CalendarCell::Empty`] cells as the
/// weekday index of its first day (Sunday = 0), followed by one
/// [`CalendarCell::Day`] per day of the month in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month.
    Empty,
    /// A concrete day of the displayed month.
    Day(NaiveDate),
}

/// Builds the day grid for the given month.
///
/// The cells are laid out row-major into a 7-column, Sunday-first grid.
///
/// Panics on an invalid month, like the chrono constructors it is built on;
/// use [`YearMonth`] to navigate months safely.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("Could not create NaiveDate");
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = Vec::with_capacity(leading + 31);
    cells.extend(std::iter::repeat(CalendarCell::Empty).take(leading));
    for day in 1..=days_in_month(year, month) {
        cells.push(CalendarCell::Day(
            NaiveDate::from_ymd_opt(year, month, day).expect("Could not create NaiveDate"),
        ));
    }
    cells
}

/// Number of days in the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("Could not create NaiveDate");
    first
        .with_day(31)
        .map(|_| 31)
        .or_else(|| first.with_day(30).map(|_| 30))
        .or_else(|| first.with_day(29).map(|_| 29))
        .unwrap_or(28)
}

/// English name of a month (1-12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => panic!("Unknown month: {month}"),
    }
}

/// A year and month pair, used for month navigation in [`CalendarView`].
///
/// The month is always kept in `1..=12`; navigation carries into the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    /// The current real-world month (UTC).
    pub fn current() -> Self {
        let today = chrono::offset::Utc::now().date_naive();
        Self::new(today.year(), today.month())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.add_months(1)
    }

    pub fn prev(self) -> Self {
        self.add_months(-1)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_leading_blanks_then_ascending_days() {
        for year in [2023, 2024, 2025, 2026] {
            for month in 1..=12 {
                let cells = month_grid(year, month);
                let first =
                    NaiveDate::from_ymd_opt(year, month, 1).expect("Could not create NaiveDate");
                let leading = first.weekday().num_days_from_sunday() as usize;

                assert_eq!(
                    cells.len(),
                    leading + days_in_month(year, month) as usize,
                    "cell count for {year}-{month}"
                );
                assert!(
                    cells[..leading]
                        .iter()
                        .all(|cell| *cell == CalendarCell::Empty),
                    "leading cells of {year}-{month} should be empty"
                );
                for (offset, cell) in cells[leading..].iter().enumerate() {
                    match cell {
                        CalendarCell::Day(date) => {
                            assert_eq!(date.day() as usize, offset + 1);
                            assert_eq!(date.month(), month);
                            assert_eq!(date.year(), year);
                        }
                        CalendarCell::Empty => panic!("unexpected blank inside {year}-{month}"),
                    }
                }
            }
        }
    }

    #[test]
    fn june_2025_starts_on_sunday() {
        let cells = month_grid(2025, 6);
        assert_eq!(cells.len(), 30);
        assert_eq!(
            cells[0],
            CalendarCell::Day(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);

        // Feb 1 2024 is a Thursday: four blanks, then 29 days.
        assert_eq!(month_grid(2024, 2).len(), 4 + 29);
    }

    #[test]
    fn twelve_months_forward_is_next_year() {
        let start = YearMonth::new(2025, 6);
        let mut ym = start;
        for _ in 0..12 {
            ym = ym.next();
        }
        assert_eq!(ym, YearMonth::new(2026, 6));
    }

    #[test]
    fn next_then_prev_is_identity() {
        for month in 1..=12 {
            let ym = YearMonth::new(2025, month);
            assert_eq!(ym.next().prev(), ym);
            assert_eq!(ym.prev().next(), ym);
        }
    }

    #[test]
    fn navigation_rolls_over_year_boundaries() {
        assert_eq!(YearMonth::new(2025, 12).next(), YearMonth::new(2026, 1));
        assert_eq!(YearMonth::new(2025, 1).prev(), YearMonth::new(2024, 12));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
