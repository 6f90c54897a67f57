//! Shared CSS class constants for calpane.
//!
//! This module centralizes all CSS class names used across the codebase,
//! making them discoverable, avoiding typos, and enabling IDE autocompletion.
//!
//! # Usage
//!
//! ```ignore
//! use crate::styles::{calendar, class, color};
//!
//! container.add_css_class(class::SURFACE);
//! label.add_css_class(color::MUTED);
//! cell.add_css_class(calendar::DAY_CELL);
//! ```

/// Core structural/layout CSS classes.
pub mod class {
    /// Application window (`.cp-window`).
    pub const WINDOW: &str = "cp-window";

    /// Main content column (`.cp-content`).
    pub const CONTENT: &str = "cp-content";

    /// Elevated surface container (`.cp-surface`).
    pub const SURFACE: &str = "cp-surface";

    /// Subtle card container (`.cp-card`).
    pub const CARD: &str = "cp-card";

    /// Pill-shaped chip container (`.cp-chip`).
    pub const CHIP: &str = "cp-chip";
}

/// Foreground/text color classes.
///
/// These apply `color: var(--color-foreground-*)` to text.
pub mod color {
    /// Primary foreground color (`.cp-primary`).
    pub const PRIMARY: &str = "cp-primary";

    /// Muted/secondary foreground color (`.cp-muted`).
    pub const MUTED: &str = "cp-muted";

    /// Subtle/tertiary foreground color (`.cp-subtle`).
    pub const SUBTLE: &str = "cp-subtle";

    /// Accent color (`.cp-accent`).
    pub const ACCENT: &str = "cp-accent";

    /// Weekend color (`.cp-weekend-text`).
    pub const WEEKEND: &str = "cp-weekend-text";
}

/// Button style classes.
pub mod button {
    /// Reset button - strips all GTK chrome (`.cp-btn-reset`).
    ///
    /// Use for buttons that need custom styling without default
    /// backgrounds, borders, shadows, or padding.
    pub const RESET: &str = "cp-btn-reset";

    /// Square icon navigation button (`.cp-btn-nav`).
    pub const NAV: &str = "cp-btn-nav";
}

/// Header bar classes.
pub mod header {
    /// Header container (`.header`).
    pub const BAR: &str = "header";

    /// "Calendar {year}" title (`.header-title`).
    pub const TITLE: &str = "header-title";

    /// Tagline under the title (`.header-subtitle`).
    pub const SUBTITLE: &str = "header-subtitle";

    /// Today chip (`.header-today-chip`).
    pub const TODAY_CHIP: &str = "header-today-chip";

    /// Year navigation cluster (`.header-year-nav`).
    pub const YEAR_NAV: &str = "header-year-nav";

    /// Theme toggle button (`.header-theme-toggle`).
    pub const THEME_TOGGLE: &str = "header-theme-toggle";
}

/// Month view classes.
pub mod calendar {
    /// Month view surface (`.calendar-view`).
    pub const VIEW: &str = "calendar-view";

    /// "{Month} {year}" title (`.calendar-title`).
    pub const TITLE: &str = "calendar-title";

    /// Day-count subtitle row (`.calendar-subtitle`).
    pub const SUBTITLE: &str = "calendar-subtitle";

    /// Month accent dot (`.accent-dot`); combined with a per-month
    /// `accent-dot-<routekey>` class for the gradient.
    pub const ACCENT_DOT: &str = "accent-dot";

    /// Month navigation button (`.calendar-nav-button`).
    pub const NAV_BUTTON: &str = "calendar-nav-button";

    /// 7-column day grid (`.calendar-grid`).
    pub const GRID: &str = "calendar-grid";

    /// Weekday header label (`.calendar-weekday`).
    pub const WEEKDAY: &str = "calendar-weekday";

    /// Day cell (`.day-cell`).
    pub const DAY_CELL: &str = "day-cell";

    /// Leading blank cell (`.day-blank`).
    pub const DAY_BLANK: &str = "day-blank";

    /// Day number label (`.day-number`).
    pub const DAY_NUMBER: &str = "day-number";

    /// Weekend state on cells and weekday headers (`.weekend`).
    pub const WEEKEND: &str = "weekend";

    /// Today state on the matching cell (`.today`).
    pub const TODAY: &str = "today";

    /// Today indicator dot (`.today-dot`).
    pub const TODAY_DOT: &str = "today-dot";

    /// Small weekday tag inside weekend cells (`.weekend-tag`).
    pub const WEEKEND_TAG: &str = "weekend-tag";

    /// Legend row (`.calendar-legend`).
    pub const LEGEND: &str = "calendar-legend";

    /// Legend swatch base (`.legend-swatch`).
    pub const LEGEND_SWATCH: &str = "legend-swatch";

    /// Today legend swatch (`.legend-swatch-today`).
    pub const LEGEND_SWATCH_TODAY: &str = "legend-swatch-today";

    /// Weekend legend swatch (`.legend-swatch-weekend`).
    pub const LEGEND_SWATCH_WEEKEND: &str = "legend-swatch-weekend";
}

/// Month picker classes.
pub mod picker {
    /// Picker section container (`.month-picker`).
    pub const SECTION: &str = "month-picker";

    /// "Select Month" heading (`.month-picker-title`).
    pub const TITLE: &str = "month-picker-title";

    /// Tile grid (`.month-picker-grid`).
    pub const GRID: &str = "month-picker-grid";

    /// Month tile button (`.month-tile`).
    pub const TILE: &str = "month-tile";

    /// Active month tile state (`.active`).
    pub const ACTIVE: &str = "active";

    /// Zero-padded month number label (`.month-tile-number`).
    pub const TILE_NUMBER: &str = "month-tile-number";

    /// Month name label (`.month-tile-name`).
    pub const TILE_NAME: &str = "month-tile-name";

    /// Day-count label (`.month-tile-days`).
    pub const TILE_DAYS: &str = "month-tile-days";

    /// Per-month tile class carrying the accent gradient
    /// (`.month-tile-<routekey>`).
    pub fn tile_class(route_key: &str) -> String {
        format!("month-tile-{route_key}")
    }

    /// Per-month accent dot class (`.accent-dot-<routekey>`).
    pub fn accent_dot_class(route_key: &str) -> String {
        format!("accent-dot-{route_key}")
    }
}

/// Year statistics row classes.
pub mod stats {
    /// Statistics row container (`.stats-row`).
    pub const ROW: &str = "stats-row";

    /// Single stat card (`.stat-card`).
    pub const CARD: &str = "stat-card";

    /// Stat label (`.stat-label`).
    pub const LABEL: &str = "stat-label";

    /// Stat value (`.stat-value`).
    pub const VALUE: &str = "stat-value";

    /// Accent-colored value (`.stat-value-accent`).
    pub const VALUE_ACCENT: &str = "stat-value-accent";

    /// Weekend-colored value (`.stat-value-weekend`).
    pub const VALUE_WEEKEND: &str = "stat-value-weekend";
}
