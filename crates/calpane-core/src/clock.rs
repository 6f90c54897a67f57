//! Clock abstraction.
//!
//! Every render reads the clock fresh; nothing caches "today". Routing all
//! reads through this trait lets tests pin the date and exercise the
//! grid/statistics code deterministically.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Source of the current date and instant.
pub trait Clock {
    /// The current civil date in the local timezone.
    fn today(&self) -> NaiveDate;

    /// The current instant in the local timezone.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the ambient system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    fn now(&self) -> DateTime<Local> {
        // Noon avoids DST-transition ambiguity around midnight.
        let Some(noon) = self.0.and_hms_opt(12, 0, 0) else {
            return Local::now();
        };
        match Local.from_local_datetime(&noon) {
            chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => dt,
            chrono::LocalResult::None => Local::now(),
        }
    }
}
