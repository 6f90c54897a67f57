//! The month view: title row, weekday headers, day grid, legend.

use chrono::NaiveDate;
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Grid, Label, Orientation, Widget};

use calpane_core::grid::{build_grid, DayCell};
use calpane_core::months::WEEKDAY_LABELS;
use calpane_core::navigator::{Action, ViewState};

use crate::styles::{calendar as cal, class, color, picker};
use crate::widgets::{nav_button, Dispatcher};

/// Build the month view surface for the current state.
pub fn build(state: ViewState, today: NaiveDate, show_legend: bool, dispatch: &Dispatcher) -> Widget {
    let month = state.month();

    let container = GtkBox::new(Orientation::Vertical, 16);
    container.add_css_class(class::SURFACE);
    container.add_css_class(cal::VIEW);

    // Title row: month name + accent dot + day count, nav buttons right.
    let title_row = GtkBox::new(Orientation::Horizontal, 8);

    let title_box = GtkBox::new(Orientation::Vertical, 4);
    title_box.set_hexpand(true);
    title_box.set_halign(Align::Start);

    let title = Label::new(Some(&format!("{} {}", month.name, state.year)));
    title.add_css_class(cal::TITLE);
    title.set_halign(Align::Start);
    title_box.append(&title);

    let subtitle_row = GtkBox::new(Orientation::Horizontal, 6);
    subtitle_row.add_css_class(cal::SUBTITLE);
    let accent_dot = GtkBox::new(Orientation::Horizontal, 0);
    accent_dot.add_css_class(cal::ACCENT_DOT);
    accent_dot.add_css_class(&picker::accent_dot_class(month.route_key));
    accent_dot.set_valign(Align::Center);
    subtitle_row.append(&accent_dot);
    let day_count = Label::new(Some(&format!("{} days", month.fixed_day_count)));
    day_count.add_css_class(color::MUTED);
    subtitle_row.append(&day_count);
    title_box.append(&subtitle_row);

    title_row.append(&title_box);

    let prev = nav_button("go-previous-symbolic", Action::PreviousMonth, dispatch);
    prev.add_css_class(cal::NAV_BUTTON);
    prev.set_tooltip_text(Some("Previous month"));
    title_row.append(&prev);

    let next = nav_button("go-next-symbolic", Action::NextMonth, dispatch);
    next.add_css_class(cal::NAV_BUTTON);
    next.set_tooltip_text(Some("Next month"));
    title_row.append(&next);

    container.append(&title_row);

    container.append(&build_day_grid(state, today));

    if show_legend {
        container.append(&build_legend());
    }

    container.upcast::<Widget>()
}

/// Build the 7-column grid: one header row of weekday labels, then the
/// cell sequence from the grid builder wrapped at seven per row.
fn build_day_grid(state: ViewState, today: NaiveDate) -> Widget {
    let month = state.month();

    let grid = Grid::new();
    grid.add_css_class(cal::GRID);
    grid.set_column_homogeneous(true);
    grid.set_row_spacing(6);
    grid.set_column_spacing(6);

    for (column, label_text) in WEEKDAY_LABELS.iter().enumerate() {
        let label = Label::new(Some(label_text));
        label.add_css_class(cal::WEEKDAY);
        if column == 0 || column == 6 {
            label.add_css_class(cal::WEEKEND);
        }
        grid.attach(&label, column as i32, 0, 1, 1);
    }

    let cells = build_grid(state.year, state.month_index, month.fixed_day_count, today);
    for (index, cell) in cells.iter().enumerate() {
        let column = (index % 7) as i32;
        let row = 1 + (index / 7) as i32;
        grid.attach(&build_cell(cell), column, row, 1, 1);
    }

    grid.upcast::<Widget>()
}

fn build_cell(cell: &DayCell) -> Widget {
    match cell {
        DayCell::Blank => {
            let blank = GtkBox::new(Orientation::Vertical, 0);
            blank.add_css_class(cal::DAY_BLANK);
            blank.upcast::<Widget>()
        }
        DayCell::Day {
            day_number,
            weekday_index,
            is_weekend,
            is_today,
        } => {
            let cell_box = GtkBox::new(Orientation::Vertical, 2);
            cell_box.add_css_class(cal::DAY_CELL);
            if *is_weekend {
                cell_box.add_css_class(cal::WEEKEND);
            }
            if *is_today {
                cell_box.add_css_class(cal::TODAY);
            }

            if *is_today {
                let dot = GtkBox::new(Orientation::Horizontal, 0);
                dot.add_css_class(cal::TODAY_DOT);
                dot.set_halign(Align::End);
                cell_box.append(&dot);
            }

            let number = Label::new(Some(&day_number.to_string()));
            number.add_css_class(cal::DAY_NUMBER);
            number.set_halign(Align::Center);
            cell_box.append(&number);

            if *is_weekend {
                let tag = Label::new(Some(WEEKDAY_LABELS[*weekday_index as usize]));
                tag.add_css_class(cal::WEEKEND_TAG);
                tag.set_halign(Align::Center);
                cell_box.append(&tag);
            }

            cell_box.upcast::<Widget>()
        }
    }
}

fn build_legend() -> Widget {
    let legend = GtkBox::new(Orientation::Horizontal, 16);
    legend.add_css_class(cal::LEGEND);

    legend.append(&legend_entry(cal::LEGEND_SWATCH_TODAY, "Today"));
    legend.append(&legend_entry(cal::LEGEND_SWATCH_WEEKEND, "Weekend"));

    legend.upcast::<Widget>()
}

fn legend_entry(swatch_class: &str, text: &str) -> Widget {
    let entry = GtkBox::new(Orientation::Horizontal, 6);

    let swatch = GtkBox::new(Orientation::Horizontal, 0);
    swatch.add_css_class(cal::LEGEND_SWATCH);
    swatch.add_css_class(swatch_class);
    swatch.set_valign(Align::Center);
    entry.append(&swatch);

    let label = Label::new(Some(text));
    label.add_css_class(color::MUTED);
    entry.append(&label);

    entry.upcast::<Widget>()
}
