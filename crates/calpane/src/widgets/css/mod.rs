//! CSS for the calpane window and widgets.
//!
//! This module contains all CSS generation:
//! - `utility_css()` - Shared utility classes (window, surfaces, buttons, colors)
//! - `app_css()` - Widget-specific styling
//!
//! CSS is organized into submodules by component:
//! - `base` - Shared utility classes used across the window
//! - `header` - Title, today chip, year navigation
//! - `calendar` - Month view grid, day cells, legend
//! - `months` - Month picker tiles and per-month accent gradients
//! - `stats` - Year statistics cards
//!
//! Theme colors arrive as CSS variables from
//! `calpane_core::ThemePalette::css_vars_block()`, so none of the rules
//! below mention concrete colors.

mod base;
mod calendar;
mod header;
mod months;
mod stats;

/// Return shared utility CSS.
pub fn utility_css() -> &'static str {
    base::css()
}

/// Generate all widget CSS.
pub fn app_css() -> String {
    let header_css = header::css();
    let calendar_css = calendar::css();
    let months_css = months::css();
    let stats_css = stats::css();

    format!("{header_css}\n{calendar_css}\n{months_css}\n{stats_css}")
}
