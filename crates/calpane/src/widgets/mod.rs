//! Widget builders for the calpane window.
//!
//! Each widget is a plain builder function returning a GTK widget tree.
//! State flows in read-only; user input flows out through the shared
//! [`Dispatcher`], and the window re-renders the whole tree per action.

pub mod header;
pub mod month_picker;
pub mod month_view;
pub mod stats;
pub mod theme_switch;

pub mod css;

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Align, Button};

use calpane_core::navigator::Action;

use crate::styles::button;

/// Shared dispatch callback handed to every widget.
pub type Dispatcher = Rc<dyn Fn(Action)>;

/// Build a square icon navigation button that dispatches `action`.
pub fn nav_button(icon_name: &str, action: Action, dispatch: &Dispatcher) -> Button {
    let btn = Button::from_icon_name(icon_name);
    btn.add_css_class(button::NAV);
    btn.set_valign(Align::Center);
    if let Some(child) = btn.child() {
        child.set_halign(Align::Center);
        child.set_valign(Align::Center);
    }

    let dispatch = dispatch.clone();
    btn.connect_clicked(move |_| dispatch(action));
    btn
}
