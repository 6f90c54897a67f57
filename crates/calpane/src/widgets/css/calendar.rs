//! Month view CSS: title row, weekday headers, day grid, legend.

/// Return month view CSS.
pub fn css() -> &'static str {
    r#"
/* ===== MONTH VIEW ===== */

.calendar-title {
    font-size: var(--font-size-lg);
    font-weight: 700;
}

.accent-dot {
    min-width: 14px;
    min-height: 14px;
    border-radius: var(--radius-pill);
}

.calendar-weekday {
    font-size: var(--font-size-sm);
    font-weight: 600;
    letter-spacing: 1px;
    color: var(--color-foreground-muted);
    padding: var(--spacing-sm) 0;
    border-bottom: 1px solid var(--color-border-subtle);
}

.calendar-weekday.weekend {
    color: var(--color-weekend);
}

.day-blank {
    min-height: 56px;
}

.day-cell {
    min-height: 56px;
    padding: var(--spacing-sm);
    background-color: var(--color-background-surface);
    border: 1px solid var(--color-border-subtle);
    border-radius: var(--radius-cell);
    transition: background-color 150ms ease-out;
}

.day-cell:hover {
    background-color: var(--color-background-card-hover);
}

.day-number {
    font-size: var(--font-size-base);
    font-weight: 600;
}

.day-cell.weekend .day-number {
    color: var(--color-weekend);
}

.weekend-tag {
    font-size: var(--font-size-sm);
    color: var(--color-weekend);
}

/* The today ring replaces the normal border, so the cell keeps its size */
.day-cell.today {
    background-color: var(--color-today-background);
    border: 2px solid var(--color-today-border);
    padding: calc(var(--spacing-sm) - 1px);
}

.today-dot {
    min-width: 8px;
    min-height: 8px;
    border-radius: var(--radius-pill);
    background-color: var(--color-accent-primary);
}

.calendar-legend {
    margin-top: var(--spacing-sm);
    padding-top: var(--spacing-lg);
    border-top: 1px solid var(--color-border-subtle);
}

.legend-swatch {
    min-width: 14px;
    min-height: 14px;
    border-radius: 4px;
}

.legend-swatch-today {
    background-color: var(--color-today-background);
    border: 2px solid var(--color-today-border);
}

.legend-swatch-weekend {
    background-color: var(--color-weekend);
}
"#
}
