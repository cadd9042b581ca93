//! The user's local calendar date.
//!
//! Follow-up validation and dashboard KPIs compare against "today" in the
//! browser's timezone, not UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, Month};

/// Build a date from JavaScript-style fields (`month0` is zero-based).
#[must_use]
pub fn from_js_fields(year: i32, month0: u32, day: u32) -> Option<Date> {
    let month = Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Today's local date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        from_js_fields(year, now.get_month(), now.get_date()).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
