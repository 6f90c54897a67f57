//! Grid construction driven by the month registry, the way the view
//! renders it.

use calpane_core::clock::{Clock, FixedClock};
use calpane_core::grid::{self, DayCell};
use calpane_core::months;
use chrono::{Datelike, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn every_month_of_the_year_builds_a_consistent_grid() {
    let clock = FixedClock(date(2025, 5, 14));

    for (index, month) in months::all_months().iter().enumerate() {
        let cells = grid::build_grid(2025, index, month.fixed_day_count, clock.today());

        let first = date(2025, index as u32 + 1, 1);
        let offset = grid::weekday_index_of(first) as usize;
        assert_eq!(
            cells.len(),
            offset + month.fixed_day_count as usize,
            "{} grid length",
            month.name
        );

        // Blanks only at the front, then days 1..=n in order.
        assert!(cells[..offset].iter().all(|c| *c == DayCell::Blank));
        let mut expected_day = 1;
        for cell in &cells[offset..] {
            match cell {
                DayCell::Day {
                    day_number,
                    weekday_index,
                    ..
                } => {
                    assert_eq!(*day_number, expected_day);
                    // Weekdays advance cyclically from the month's first day.
                    assert_eq!(
                        *weekday_index,
                        (offset as u32 + expected_day - 1) % 7,
                        "{} day {}",
                        month.name,
                        expected_day
                    );
                    expected_day += 1;
                }
                DayCell::Blank => panic!("blank after day cells in {}", month.name),
            }
        }
    }
}

#[test]
fn today_appears_only_in_the_month_being_viewed() {
    let clock = FixedClock(date(2025, 5, 14));
    let today = clock.today();

    for (index, month) in months::all_months().iter().enumerate() {
        let cells = grid::build_grid(2025, index, month.fixed_day_count, today);
        let today_cells = cells
            .iter()
            .filter(|c| matches!(c, DayCell::Day { is_today: true, .. }))
            .count();
        assert_eq!(today_cells, usize::from(index == today.month0() as usize));
    }
}

#[test]
fn rebuilding_the_same_view_is_idempotent() {
    // Re-renders recompute from state plus the clock; identical inputs must
    // produce identical cells.
    let today = date(2024, 2, 15);
    let a = grid::build_grid(2024, 1, 28, today);
    let b = grid::build_grid(2024, 1, 28, today);
    assert_eq!(a, b);
}

#[test]
fn weekend_count_over_a_fixed_year_matches_the_grid() {
    // 2025 starts on a Wednesday, so its 365 days hold exactly 52 Saturdays
    // and 52 Sundays: the grid's weekend flags must sum to the 104 the
    // stats row reports.
    let today = date(2025, 6, 1);
    let weekend_days: usize = months::all_months()
        .iter()
        .enumerate()
        .map(|(index, month)| {
            grid::build_grid(2025, index, month.fixed_day_count, today)
                .iter()
                .filter(|c| matches!(c, DayCell::Day { is_weekend: true, .. }))
                .count()
        })
        .sum();
    assert_eq!(
        weekend_days as u32,
        calpane_core::navigator::WEEKEND_DAYS_PER_YEAR
    );
}
