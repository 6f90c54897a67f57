//! Static month registry.
//!
//! The twelve descriptors below drive both navigation (route keys) and
//! rendering (day counts, picker accents). The table is the single source
//! of truth; nothing else hardcodes month names or day counts.

/// Display-only gradient color pair for a month's picker tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

/// One calendar month as the UI renders it.
///
/// `fixed_day_count` is table-driven and intentionally not leap-aware:
/// February is always 28. Weekday arithmetic elsewhere stays exact
/// Gregorian, so the only visible consequence is that Feb 29 of a leap
/// year is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDescriptor {
    /// English month name, capitalized.
    pub name: &'static str,
    /// Lowercase slug selecting this month from the CLI or config.
    pub route_key: &'static str,
    /// Number of day cells rendered for this month (28-31).
    pub fixed_day_count: u32,
    /// Picker tile accent; irrelevant to logic.
    pub accent: Accent,
}

/// The twelve months in calendar order, index 0 = January.
pub static MONTHS: [MonthDescriptor; 12] = [
    MonthDescriptor {
        name: "January",
        route_key: "january",
        fixed_day_count: 31,
        accent: Accent { from: "#60a5fa", to: "#22d3ee" },
    },
    MonthDescriptor {
        name: "February",
        route_key: "february",
        fixed_day_count: 28,
        accent: Accent { from: "#f472b6", to: "#fb7185" },
    },
    MonthDescriptor {
        name: "March",
        route_key: "march",
        fixed_day_count: 31,
        accent: Accent { from: "#4ade80", to: "#34d399" },
    },
    MonthDescriptor {
        name: "April",
        route_key: "april",
        fixed_day_count: 30,
        accent: Accent { from: "#c084fc", to: "#a78bfa" },
    },
    MonthDescriptor {
        name: "May",
        route_key: "may",
        fixed_day_count: 31,
        accent: Accent { from: "#facc15", to: "#fb923c" },
    },
    MonthDescriptor {
        name: "June",
        route_key: "june",
        fixed_day_count: 30,
        accent: Accent { from: "#f87171", to: "#f472b6" },
    },
    MonthDescriptor {
        name: "July",
        route_key: "july",
        fixed_day_count: 31,
        accent: Accent { from: "#3b82f6", to: "#6366f1" },
    },
    MonthDescriptor {
        name: "August",
        route_key: "august",
        fixed_day_count: 31,
        accent: Accent { from: "#2dd4bf", to: "#06b6d4" },
    },
    MonthDescriptor {
        name: "September",
        route_key: "september",
        fixed_day_count: 30,
        accent: Accent { from: "#fbbf24", to: "#fb923c" },
    },
    MonthDescriptor {
        name: "October",
        route_key: "october",
        fixed_day_count: 31,
        accent: Accent { from: "#a855f7", to: "#ec4899" },
    },
    MonthDescriptor {
        name: "November",
        route_key: "november",
        fixed_day_count: 30,
        accent: Accent { from: "#a16207", to: "#d97706" },
    },
    MonthDescriptor {
        name: "December",
        route_key: "december",
        fixed_day_count: 31,
        accent: Accent { from: "#38bdf8", to: "#3b82f6" },
    },
];

/// Short weekday labels for the grid header, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Ordered month table, index 0 = January .. 11 = December.
pub fn all_months() -> &'static [MonthDescriptor; 12] {
    &MONTHS
}

/// Look up a month index by its route key (case-insensitive, trimmed).
///
/// Returns `None` for unknown keys; callers fall back to the clock's
/// current month rather than treating this as an error.
pub fn find_index_by_route_key(key: &str) -> Option<usize> {
    let key = key.trim();
    MONTHS.iter().position(|m| m.route_key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_months_in_calendar_order() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(MONTHS[0].name, "January");
        assert_eq!(MONTHS[11].name, "December");
    }

    #[test]
    fn route_keys_are_unique_lowercase_names() {
        for (i, month) in MONTHS.iter().enumerate() {
            assert_eq!(month.route_key, month.name.to_lowercase());
            // Unique: no other month shares this key.
            assert_eq!(find_index_by_route_key(month.route_key), Some(i));
        }
    }

    #[test]
    fn day_counts_match_the_fixed_table() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, want) in MONTHS.iter().zip(expected) {
            assert_eq!(month.fixed_day_count, want, "{}", month.name);
        }
        // February is fixed at 28 regardless of leap years.
        assert_eq!(MONTHS[1].fixed_day_count, 28);
        // The fixed table sums to the 365 the statistics assume.
        let total: u32 = MONTHS.iter().map(|m| m.fixed_day_count).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims() {
        assert_eq!(find_index_by_route_key("March"), Some(2));
        assert_eq!(find_index_by_route_key("  december "), Some(11));
    }

    #[test]
    fn lookup_misses_return_none() {
        assert_eq!(find_index_by_route_key("xyz"), None);
        assert_eq!(find_index_by_route_key(""), None);
    }
}
