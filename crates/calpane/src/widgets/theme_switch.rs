//! Light/dark theme toggle button.

use gtk4::prelude::*;
use gtk4::{Align, Button, Widget};

use calpane_core::navigator::Action;
use calpane_core::ThemeMode;

use crate::styles::{button, header};
use crate::widgets::Dispatcher;

/// Build the toggle for the given active mode. The icon shows the variant
/// the toggle switches to, not the current one.
pub fn build(mode: ThemeMode, dispatch: &Dispatcher) -> Widget {
    let (icon_name, tooltip) = match mode {
        ThemeMode::Light => ("weather-clear-night-symbolic", "Switch to dark theme"),
        ThemeMode::Dark => ("weather-clear-symbolic", "Switch to light theme"),
    };

    let toggle = Button::from_icon_name(icon_name);
    toggle.add_css_class(button::NAV);
    toggle.add_css_class(header::THEME_TOGGLE);
    toggle.set_valign(Align::Center);
    toggle.set_tooltip_text(Some(tooltip));

    let dispatch = dispatch.clone();
    toggle.connect_clicked(move |_| dispatch(Action::ToggleTheme));

    toggle.upcast::<Widget>()
}
