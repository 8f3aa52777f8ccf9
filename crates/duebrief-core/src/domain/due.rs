//! Due-date normalization.
//!
//! Timezone policy: every comparison happens on calendar dates in a single
//! configured offset. "Today" is derived from the clock in that offset, and
//! due timestamps that carry their own offset are converted into it before
//! the date is taken. Floating times (no offset) are already wall-clock in
//! the user's zone, so only their date part is used.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const DATE_ONLY: &str = "%Y-%m-%d";
const FLOATING: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a raw due string into a calendar date in `tz`.
///
/// Returns `None` when the text matches none of the accepted shapes.
pub fn parse_due_date(raw: &str, tz: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_ONLY) {
        return Some(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&tz).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, FLOATING)
        .ok()
        .map(|dt| dt.date())
}

/// Calendar date of `now` as seen in `tz`.
pub fn local_date(now: DateTime<Utc>, tz: FixedOffset) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Build a fixed offset from minutes east of UTC.
///
/// Returns `None` outside ±24h.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}
