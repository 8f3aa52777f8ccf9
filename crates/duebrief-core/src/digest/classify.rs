//! Date classification: which bucket a due date falls into.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a due date lands relative to "today".
///
/// Serialized as SCREAMING_SNAKE_CASE: TODAY / UPCOMING / OUT_OF_WINDOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    Today,
    Upcoming,
    OutOfWindow,
}

/// Number of days after today that still count as upcoming.
///
/// The bound is inclusive: with the default of 4, a task due on
/// today + 4 is upcoming and one due on today + 5 is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookaheadWindow(u32);

impl LookaheadWindow {
    pub const DEFAULT_DAYS: u32 = 4;

    pub fn days(days: u32) -> Self {
        Self(days)
    }

    pub fn as_days(self) -> u32 {
        self.0
    }

    /// Last date inside the window. Saturates at the end of the calendar.
    pub fn last_day(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Default for LookaheadWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl fmt::Display for LookaheadWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Classify a due date against `today`.
///
/// Overdue dates (before today) are OUT_OF_WINDOW, same as dates past the
/// window. They are not resurfaced.
pub fn classify(due: NaiveDate, today: NaiveDate, window: LookaheadWindow) -> Bucket {
    if due == today {
        Bucket::Today
    } else if due > today && due <= window.last_day(today) {
        Bucket::Upcoming
    } else {
        Bucket::OutOfWindow
    }
}
