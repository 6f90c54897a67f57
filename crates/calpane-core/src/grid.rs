//! Pure month-grid construction.
//!
//! No GTK dependencies here; the function maps a (year, month, day count)
//! triple plus "today" to the flat cell sequence a 7-column grid renders.

use chrono::{Datelike, NaiveDate};

/// One cell in the 7-column month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Leading placeholder before day 1.
    Blank,
    /// A rendered day of the month.
    Day {
        /// 1-based day of the month.
        day_number: u32,
        /// 0 = Sunday .. 6 = Saturday, exact Gregorian.
        weekday_index: u32,
        /// Saturday or Sunday.
        is_weekend: bool,
        /// True iff year, month, and day all match "today".
        is_today: bool,
    },
}

impl DayCell {
    /// True for populated day cells.
    pub fn is_day(&self) -> bool {
        matches!(self, DayCell::Day { .. })
    }
}

/// Sunday-based weekday index (0 = Sunday .. 6 = Saturday).
pub fn weekday_index_of(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Build the cell sequence for one month view.
///
/// Emits one blank per weekday slot before day 1 (none if the month starts
/// on a Sunday), then a cell for each day `1..=fixed_day_count`. Total
/// length is `first_weekday + fixed_day_count`.
///
/// The weekday of day 1 is exact Gregorian even though `fixed_day_count`
/// comes from the non-leap month table, so a leap-year February lines up
/// correctly and simply never shows the 29th.
pub fn build_grid(
    year: i32,
    month_index: usize,
    fixed_day_count: u32,
    today: NaiveDate,
) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month_index as u32 + 1, 1) else {
        // Outside chrono's representable range; nothing to render.
        return Vec::new();
    };
    let first_weekday = weekday_index_of(first);

    let mut cells = Vec::with_capacity(first_weekday as usize + fixed_day_count as usize);
    cells.resize(first_weekday as usize, DayCell::Blank);

    for day_number in 1..=fixed_day_count {
        let weekday_index = (first_weekday + day_number - 1) % 7;
        cells.push(DayCell::Day {
            day_number,
            weekday_index,
            is_weekend: weekday_index == 0 || weekday_index == 6,
            is_today: today.year() == year
                && today.month0() as usize == month_index
                && today.day() == day_number,
        });
    }

    cells
}
