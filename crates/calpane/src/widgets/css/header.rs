//! Header CSS.

/// Return header CSS.
pub fn css() -> &'static str {
    r#"
/* ===== HEADER ===== */

.header-title {
    font-size: var(--font-size-xl);
    font-weight: 800;
}

.header-subtitle {
    font-size: var(--font-size-base);
}

.header-year-nav label {
    font-weight: 600;
    padding: 0 var(--spacing-xs);
}
"#
}
