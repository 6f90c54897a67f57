//! Navigation state and date-derived statistics.
//!
//! [`ViewState`] plus [`Action`] form a reducer: the window owns the single
//! state value, widgets dispatch actions, and every transition is a pure
//! function of the previous state. Nothing here touches GTK or the clock;
//! callers pass `today` in explicitly.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::months;
use crate::theme::ThemeMode;

/// Day count the year statistics assume, matching the non-leap month table.
pub const DAYS_PER_YEAR: i64 = 365;

/// Weekend-day count the statistics row reports for a year.
pub const WEEKEND_DAYS_PER_YEAR: u32 = 104;

/// The whole navigable state of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Displayed year. Adjustable without bounds.
    pub year: i32,
    /// Displayed month, 0 = January .. 11 = December.
    pub month_index: usize,
    /// Active theme variant.
    pub theme: ThemeMode,
}

/// A user-initiated state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    SelectMonth(usize),
    ToggleTheme,
}

impl ViewState {
    /// State at first render: the month resolved from `start_month` (the
    /// clock's current month when the key is unknown or empty), the clock's
    /// current year, and the configured theme.
    pub fn initial(clock: &dyn Clock, start_month: &str, theme: ThemeMode) -> Self {
        let today = clock.today();
        Self {
            year: today.year(),
            month_index: resolve_active_month(start_month, today.month0() as usize),
            theme,
        }
    }

    /// Apply one action, returning the next state.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::PreviousMonth => Self {
                month_index: previous_month(self.month_index),
                ..self
            },
            Action::NextMonth => Self {
                month_index: next_month(self.month_index),
                ..self
            },
            Action::PreviousYear => Self {
                year: previous_year(self.year),
                ..self
            },
            Action::NextYear => Self {
                year: next_year(self.year),
                ..self
            },
            Action::SelectMonth(index) => Self {
                month_index: index % 12,
                ..self
            },
            Action::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
        }
    }

    /// Descriptor of the displayed month.
    pub fn month(&self) -> &'static months::MonthDescriptor {
        &months::MONTHS[self.month_index % 12]
    }
}

/// Resolve the active month from a route key, falling back to `fallback`
/// (the clock's current month) for unknown keys. Total; absence is a
/// handled case, not a failure, and is deliberately not logged.
pub fn resolve_active_month(route_key: &str, fallback: usize) -> usize {
    months::find_index_by_route_key(route_key).unwrap_or(fallback)
}

/// Previous month with December wrap-around.
pub fn previous_month(index: usize) -> usize {
    (index + 11) % 12
}

/// Next month with January wrap-around.
pub fn next_month(index: usize) -> usize {
    (index + 1) % 12
}

/// Previous year. No lower bound is enforced.
pub fn previous_year(year: i32) -> i32 {
    year - 1
}

/// Next year. No upper bound is enforced.
pub fn next_year(year: i32) -> i32 {
    year + 1
}

/// Whole days between January 1 of `year` and `today`.
///
/// Negative when `today` precedes that January 1. Zero for years outside
/// the supported calendar range.
fn days_since_jan1(today: NaiveDate, year: i32) -> i64 {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(jan1) => today.signed_duration_since(jan1).num_days(),
        None => 0,
    }
}

/// 1-based week number of `today` counted from January 1 of `year`.
///
/// Meaningful when `year` is the current year; for any other year the
/// result is "weeks between that January 1 and the real today", which is
/// kept as-is rather than corrected.
pub fn week_number_of_today(today: NaiveDate, year: i32) -> i64 {
    let days = days_since_jan1(today, year) + 1;
    // Ceiling division that also holds for negative distances.
    days.div_euclid(7) + i64::from(days.rem_euclid(7) != 0)
}

/// Days left in `year`, assuming the fixed 365-day year.
pub fn days_remaining_in_year(today: NaiveDate, year: i32) -> i64 {
    DAYS_PER_YEAR - days_since_jan1(today, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_wrap_inverse_laws() {
        for i in 0..12 {
            assert_eq!(previous_month(next_month(i)), i);
            assert_eq!(next_month(previous_month(i)), i);
        }
    }

    #[test]
    fn month_boundary_wrap() {
        assert_eq!(previous_month(0), 11);
        assert_eq!(next_month(11), 0);
    }

    #[test]
    fn year_inverse_law() {
        for year in [-4000, -1, 0, 1, 1999, 2026, 9999] {
            assert_eq!(previous_year(next_year(year)), year);
        }
    }

    #[test]
    fn resolve_hit_overrides_fallback() {
        assert_eq!(resolve_active_month("march", 5), 2);
    }

    #[test]
    fn resolve_unknown_key_falls_back() {
        assert_eq!(resolve_active_month("xyz", 5), 5);
        assert_eq!(resolve_active_month("", 7), 7);
    }

    #[test]
    fn initial_state_uses_clock_for_year_and_fallback_month() {
        let clock = FixedClock(date(2024, 6, 15));
        let state = ViewState::initial(&clock, "", ThemeMode::Dark);
        assert_eq!(state.year, 2024);
        assert_eq!(state.month_index, 5);
        assert_eq!(state.theme, ThemeMode::Dark);

        let routed = ViewState::initial(&clock, "october", ThemeMode::Light);
        assert_eq!(routed.month_index, 9);
    }

    #[test]
    fn apply_is_pure_and_only_touches_its_field() {
        let state = ViewState {
            year: 2025,
            month_index: 11,
            theme: ThemeMode::Light,
        };
        let next = state.apply(Action::NextMonth);
        assert_eq!(next.month_index, 0);
        assert_eq!(next.year, 2025);
        assert_eq!(next.theme, ThemeMode::Light);
        // Original is unchanged (Copy semantics, but make the law explicit).
        assert_eq!(state.month_index, 11);

        assert_eq!(state.apply(Action::PreviousYear).year, 2024);
        assert_eq!(state.apply(Action::SelectMonth(3)).month_index, 3);
        assert_eq!(state.apply(Action::ToggleTheme).theme, ThemeMode::Dark);
    }

    #[test]
    fn week_number_of_jan_first_is_one() {
        assert_eq!(week_number_of_today(date(2024, 1, 1), 2024), 1);
        assert_eq!(week_number_of_today(date(2024, 1, 7), 2024), 1);
        assert_eq!(week_number_of_today(date(2024, 1, 8), 2024), 2);
    }

    #[test]
    fn days_remaining_counts_down_from_365() {
        assert_eq!(days_remaining_in_year(date(2023, 1, 1), 2023), 365);
        assert_eq!(days_remaining_in_year(date(2023, 12, 31), 2023), 1);
        // Leap year keeps the fixed constant: Dec 31 2024 is day 365 since
        // Jan 1, so the "remaining" figure goes to zero a day early.
        assert_eq!(days_remaining_in_year(date(2024, 12, 31), 2024), 0);
    }

    #[test]
    fn stats_are_monotone_as_now_advances() {
        let mut day = date(2025, 1, 1);
        let mut last_week = week_number_of_today(day, 2025);
        let mut last_remaining = days_remaining_in_year(day, 2025);
        for _ in 0..400 {
            day = day.succ_opt().unwrap();
            let week = week_number_of_today(day, 2025);
            let remaining = days_remaining_in_year(day, 2025);
            assert!(week >= last_week);
            assert!(remaining <= last_remaining);
            last_week = week;
            last_remaining = remaining;
        }
    }

    #[test]
    fn stats_for_other_years_keep_the_documented_quirk() {
        // Viewing 2026 while "today" is mid-2025: the value is the distance
        // to 2026's January 1, not clamped or corrected.
        let today = date(2025, 7, 1);
        assert!(days_remaining_in_year(today, 2026) > DAYS_PER_YEAR);
        assert!(week_number_of_today(today, 2026) < 1);
    }
}
