//! Year statistics CSS.

/// Return statistics row CSS.
pub fn css() -> &'static str {
    r#"
/* ===== YEAR STATS ===== */

.stat-card {
    background-color: var(--color-background-surface);
}

.stat-label {
    font-size: var(--font-size-sm);
}

.stat-value {
    font-size: var(--font-size-xl);
    font-weight: 700;
}

.stat-value-accent {
    color: var(--color-accent-primary);
}

.stat-value-weekend {
    color: var(--color-weekend);
}
"#
}
