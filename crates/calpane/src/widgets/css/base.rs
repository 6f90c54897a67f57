//! Shared utility CSS classes.
//!
//! These are the truly shared styles: window chrome, surfaces, cards,
//! chips, buttons, and foreground color utilities.

/// Return shared utility CSS.
pub fn css() -> &'static str {
    r#"
/* ===== SHARED UTILITY CSS ===== */

window.cp-window {
    background-color: var(--color-background-window);
    color: var(--color-foreground-primary);
    font-family: var(--font-family);
    font-size: var(--font-size-base);
}

.cp-content {
    padding: var(--spacing-xl);
}

/* Color utilities */
.cp-primary { color: var(--color-foreground-primary); }
.cp-muted { color: var(--color-foreground-muted); }
.cp-subtle { color: var(--color-foreground-subtle); }
.cp-accent { color: var(--color-accent-primary); }
.cp-weekend-text { color: var(--color-weekend); }

/* Elevated surface container */
.cp-surface {
    background-color: var(--color-background-surface);
    border: 1px solid var(--color-border-subtle);
    border-radius: var(--radius-surface);
    box-shadow: var(--shadow-soft);
    padding: var(--spacing-xl);
}

/* Subtle card container */
.cp-card {
    background-color: var(--color-background-card);
    border: 1px solid var(--color-border-subtle);
    border-radius: var(--radius-cell);
    padding: var(--spacing-lg);
}

/* Pill-shaped chip */
.cp-chip {
    background-color: var(--color-background-surface);
    border-radius: var(--radius-pill);
    box-shadow: var(--shadow-soft);
    padding: var(--spacing-sm) var(--spacing-lg);
}

/* Reset button - strips all GTK chrome so tiles style themselves */
.cp-btn-reset {
    background: none;
    background-color: transparent;
    border: none;
    box-shadow: none;
    padding: 0;
    min-width: 0;
    min-height: 0;
    color: inherit;
}

/* Square icon navigation button */
.cp-btn-nav {
    background-color: var(--color-background-card);
    border: none;
    border-radius: var(--radius-cell);
    box-shadow: none;
    min-width: 32px;
    min-height: 32px;
    padding: 4px;
    color: var(--color-foreground-primary);
    transition: background-color 150ms ease-out;
}

.cp-btn-nav:hover {
    background-color: var(--color-background-card-hover);
}

.cp-btn-nav:active {
    opacity: 0.7;
}
"#
}
