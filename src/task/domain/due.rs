//! Due-timestamp construction from separate date and time inputs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Combines separate date and time form inputs into a due timestamp.
///
/// A due timestamp exists only when both parts are supplied; a date without
/// a time (or vice versa) yields `None` rather than a partial timestamp.
#[must_use]
pub fn due_date_from_parts(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
) -> Option<DateTime<Utc>> {
    match (date, time) {
        (Some(d), Some(t)) => Some(d.and_time(t).and_utc()),
        _ => None,
    }
}
