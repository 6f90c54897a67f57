//! Month picker CSS, including the per-month accent gradients generated
//! from the registry so the table stays the single source of truth.

use std::fmt::Write;

use calpane_core::months;

/// Return month picker CSS.
pub fn css() -> String {
    let mut css = String::from(
        r#"
/* ===== MONTH PICKER ===== */

.month-picker-title {
    font-size: var(--font-size-lg);
    font-weight: 600;
}

.month-tile {
    background-color: var(--color-background-surface);
    border: 1px solid var(--color-border-subtle);
    border-radius: var(--radius-cell);
    padding: var(--spacing-lg);
    transition: background-color 150ms ease-out;
}

.month-tile:hover {
    background-color: var(--color-background-card-hover);
}

.month-tile-number {
    font-size: var(--font-size-lg);
    font-weight: 700;
}

.month-tile-name {
    font-weight: 600;
}

.month-tile-days {
    font-size: var(--font-size-sm);
    color: var(--color-foreground-muted);
}

/* Active tiles carry their month gradient; text flips to white */
.month-tile.active label {
    color: #ffffff;
}

.month-tile.active .month-tile-days {
    color: rgba(255, 255, 255, 0.8);
}
"#,
    );

    for month in months::all_months() {
        let key = month.route_key;
        let from = month.accent.from;
        let to = month.accent.to;
        let _ = write!(
            css,
            r#"
.accent-dot-{key} {{
    background: linear-gradient(to right, {from}, {to});
}}

.month-tile-{key}.active {{
    background: linear-gradient(135deg, {from}, {to});
    border-color: transparent;
}}
"#
        );
    }

    css
}
