//! Core logic for calpane.
//!
//! Everything in this crate is GTK-free: the month registry, navigation
//! state, month-grid construction, derived year statistics, theming, and
//! configuration. All date-dependent code reads the wall clock through the
//! [`Clock`] trait so it stays deterministic under test.

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod months;
pub mod navigator;
pub mod theme;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use theme::{ThemeMode, ThemePalette};
