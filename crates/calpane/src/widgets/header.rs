//! Window header: year title, today chip, year navigation, theme toggle.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Label, Orientation, Widget};

use calpane_core::clock::Clock;
use calpane_core::navigator::{Action, ViewState};

use crate::styles::{class, color, header};
use crate::widgets::{nav_button, theme_switch, Dispatcher};

/// Build the header row for the current state.
pub fn build(state: ViewState, clock: &dyn Clock, dispatch: &Dispatcher) -> Widget {
    let container = GtkBox::new(Orientation::Horizontal, 12);
    container.add_css_class(header::BAR);

    // Title column
    let title_box = GtkBox::new(Orientation::Vertical, 2);
    title_box.set_hexpand(true);
    title_box.set_halign(Align::Start);

    let title = Label::new(Some(&format!("Calendar {}", state.year)));
    title.add_css_class(header::TITLE);
    title.set_halign(Align::Start);
    title_box.append(&title);

    let subtitle = Label::new(Some("Navigate through months and track your days"));
    subtitle.add_css_class(header::SUBTITLE);
    subtitle.add_css_class(color::MUTED);
    subtitle.set_halign(Align::Start);
    title_box.append(&subtitle);

    container.append(&title_box);

    // Today chip
    let chip = GtkBox::new(Orientation::Horizontal, 6);
    chip.add_css_class(class::CHIP);
    chip.add_css_class(header::TODAY_CHIP);
    chip.set_valign(Align::Center);
    let today_label = Label::new(Some(&format!(
        "Today: {}",
        clock.now().format("%-d %B %Y")
    )));
    today_label.add_css_class(color::MUTED);
    chip.append(&today_label);
    container.append(&chip);

    // Year navigation
    let year_nav = GtkBox::new(Orientation::Horizontal, 4);
    year_nav.add_css_class(header::YEAR_NAV);
    year_nav.set_valign(Align::Center);

    let prev_year = nav_button("go-previous-symbolic", Action::PreviousYear, dispatch);
    prev_year.set_tooltip_text(Some("Previous year"));
    year_nav.append(&prev_year);

    let year_label = Label::new(Some(&state.year.to_string()));
    year_label.add_css_class(color::PRIMARY);
    year_nav.append(&year_label);

    let next_year = nav_button("go-next-symbolic", Action::NextYear, dispatch);
    next_year.set_tooltip_text(Some("Next year"));
    year_nav.append(&next_year);

    container.append(&year_nav);

    container.append(&theme_switch::build(state.theme, dispatch));

    container.upcast::<Widget>()
}
