//! Year statistics row: four derived-value cards.

use chrono::NaiveDate;
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Label, Orientation, Widget};

use calpane_core::navigator::{
    days_remaining_in_year, week_number_of_today, ViewState, DAYS_PER_YEAR,
    WEEKEND_DAYS_PER_YEAR,
};

use crate::styles::{class, color, stats};

/// Build the statistics row for the displayed year.
///
/// The week-number and days-remaining figures compare the real "today"
/// against January 1 of the displayed year; they are meaningful when that
/// year is the current one and intentionally uncorrected otherwise.
pub fn build(state: ViewState, today: NaiveDate) -> Widget {
    let row = GtkBox::new(Orientation::Horizontal, 12);
    row.add_css_class(stats::ROW);
    row.set_homogeneous(true);

    row.append(&stat_card("Days This Year", &DAYS_PER_YEAR.to_string(), None));
    row.append(&stat_card(
        "Weekends",
        &WEEKEND_DAYS_PER_YEAR.to_string(),
        Some(stats::VALUE_WEEKEND),
    ));
    row.append(&stat_card(
        "Current Week",
        &week_number_of_today(today, state.year).to_string(),
        Some(stats::VALUE_ACCENT),
    ));
    row.append(&stat_card(
        "Days Remaining",
        &days_remaining_in_year(today, state.year).to_string(),
        None,
    ));

    row.upcast::<Widget>()
}

fn stat_card(label_text: &str, value_text: &str, value_class: Option<&str>) -> Widget {
    let card = GtkBox::new(Orientation::Vertical, 4);
    card.add_css_class(class::CARD);
    card.add_css_class(stats::CARD);

    let label = Label::new(Some(label_text));
    label.add_css_class(stats::LABEL);
    label.add_css_class(color::MUTED);
    label.set_halign(Align::Start);
    card.append(&label);

    let value = Label::new(Some(value_text));
    value.add_css_class(stats::VALUE);
    if let Some(extra) = value_class {
        value.add_css_class(extra);
    }
    value.set_halign(Align::Start);
    card.append(&value);

    card.upcast::<Widget>()
}
