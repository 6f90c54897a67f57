//! The month picker: a dozen accent-gradient tiles, one per month.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Grid, Label, Orientation, Widget};

use calpane_core::months;
use calpane_core::navigator::{Action, ViewState};

use crate::styles::{button, picker};
use crate::widgets::Dispatcher;

/// Tiles per row in the picker grid.
const COLUMNS: usize = 6;

/// Build the picker for the current state.
pub fn build(state: ViewState, dispatch: &Dispatcher) -> Widget {
    let container = GtkBox::new(Orientation::Vertical, 12);
    container.add_css_class(picker::SECTION);

    let title = Label::new(Some("Select Month"));
    title.add_css_class(picker::TITLE);
    title.set_halign(Align::Start);
    container.append(&title);

    let grid = Grid::new();
    grid.add_css_class(picker::GRID);
    grid.set_column_homogeneous(true);
    grid.set_row_spacing(10);
    grid.set_column_spacing(10);

    for (index, month) in months::all_months().iter().enumerate() {
        let tile = build_tile(index, month, index == state.month_index, dispatch);
        grid.attach(&tile, (index % COLUMNS) as i32, (index / COLUMNS) as i32, 1, 1);
    }

    container.append(&grid);
    container.upcast::<Widget>()
}

fn build_tile(
    index: usize,
    month: &months::MonthDescriptor,
    is_active: bool,
    dispatch: &Dispatcher,
) -> Button {
    let tile = Button::new();
    tile.add_css_class(button::RESET);
    tile.add_css_class(picker::TILE);
    tile.add_css_class(&picker::tile_class(month.route_key));
    if is_active {
        tile.add_css_class(picker::ACTIVE);
    }

    let content = GtkBox::new(Orientation::Vertical, 2);
    content.set_halign(Align::Start);

    let number = Label::new(Some(&format!("{:02}", index + 1)));
    number.add_css_class(picker::TILE_NUMBER);
    number.set_halign(Align::Start);
    content.append(&number);

    let name = Label::new(Some(month.name));
    name.add_css_class(picker::TILE_NAME);
    name.set_halign(Align::Start);
    content.append(&name);

    let days = Label::new(Some(&format!("{} days", month.fixed_day_count)));
    days.add_css_class(picker::TILE_DAYS);
    days.set_halign(Align::Start);
    content.append(&days);

    tile.set_child(Some(&content));

    let dispatch = dispatch.clone();
    tile.connect_clicked(move |_| dispatch(Action::SelectMonth(index)));

    tile
}
