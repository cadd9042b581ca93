//! Date parsing and display helpers shared by tables, forms, and dashboards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::ParseError;

/// Parse a `YYYY-MM-DD` value from a date input.
///
/// # Errors
///
/// Returns [`ParseError::Date`] for anything else.
pub fn parse_input_date(raw: &str) -> Result<Date, ParseError> {
    let trimmed = raw.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ParseError::Date(trimmed.to_owned()))
}

/// Calendar date of a backend timestamp.
///
/// Accepts RFC 3339 (`2024-01-20T10:00:00.000Z`) and bare dates; anything else
/// yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(ts.date());
    }
    trimmed.get(..10).and_then(|head| parse_input_date(head).ok())
}

/// `dd/mm/yyyy`, the format the lead table shows.
#[must_use]
pub fn format_day_month_year(date: Date) -> String {
    format!("{:02}/{:02}/{}", date.day(), u8::from(date.month()), date.year())
}

/// `YYYY-MM-DD`, the format date inputs and the API expect.
#[must_use]
pub fn format_input_date(date: Date) -> String {
    format!("{}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Short human label for a date relative to `today`.
#[must_use]
pub fn relative_day_label(date: Date, today: Date) -> String {
    let days = (date - today).whole_days();
    match days {
        0 => "Today".to_owned(),
        1 => "Tomorrow".to_owned(),
        -1 => "Yesterday".to_owned(),
        d if d > 1 => format!("in {d} days"),
        d => format!("{} days ago", d.unsigned_abs()),
    }
}

/// Up to two uppercase initials for an avatar bubble.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
