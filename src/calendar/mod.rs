//! Month calendar: cursor arithmetic and grid construction.
//!
//! Everything here is pure. The UI keeps a [`CalendarCursor`] in its state,
//! replaces it on navigation, and asks [`render_month`] for a fresh grid on
//! every draw.

pub mod grid;

use crate::error::CoreError;
use chrono::{Datelike, Local, Months, NaiveDate};

pub use grid::{render_month, CalendarCell, CalendarGrid};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The displayed year and month, held as the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCursor {
    first: NaiveDate,
}

impl CalendarCursor {
    /// `month` is 0-based (0 = January).
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if month > 11 {
            return Err(CoreError::InvalidMonth(month));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CoreError::YearOutOfRange(year))?;
        Ok(Self { first })
    }

    /// Cursor on the current local month.
    pub fn today() -> Self {
        Self {
            first: month_start(Local::now().date_naive()),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month() as usize]
    }

    /// Heading text, e.g. `December 2023`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year())
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(self.first).num_days() as u32,
            // Only the last representable month has no successor, and it is a December.
            None => 31,
        }
    }

    /// Weekday of the 1st, Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// ISO `YYYY-MM-DD` for a day of this month.
    pub fn iso_date(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month() + 1, day)
    }
}

/// Move the cursor by `delta` months, carrying into the year in either
/// direction. Stops at the first or last month chrono can represent.
pub fn advance_month(cursor: CalendarCursor, delta: i32) -> CalendarCursor {
    let months = Months::new(delta.unsigned_abs());
    let first = if delta >= 0 {
        cursor.first.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        cursor.first.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    };
    CalendarCursor {
        first: month_start(first),
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
