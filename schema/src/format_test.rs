use super::*;
use time::macros::date;

#[test]
fn parse_input_date_accepts_iso_day() {
    assert_eq!(parse_input_date("2024-01-27"), Ok(date!(2024 - 01 - 27)));
    assert_eq!(parse_input_date(" 2024-12-01 "), Ok(date!(2024 - 12 - 01)));
}

#[test]
fn parse_input_date_rejects_other_layouts() {
    assert_eq!(parse_input_date("27/01/2024"), Err(ParseError::Date("27/01/2024".to_owned())));
    assert!(parse_input_date("").is_err());
    assert!(parse_input_date("2024-02-30").is_err());
}

#[test]
fn parse_timestamp_handles_rfc3339_and_bare_dates() {
    assert_eq!(parse_timestamp("2025-07-22T17:00:00.000Z"), Some(date!(2025 - 07 - 22)));
    assert_eq!(parse_timestamp("2025-07-22"), Some(date!(2025 - 07 - 22)));
    assert_eq!(parse_timestamp("2025-07-22T17:00"), Some(date!(2025 - 07 - 22)));
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn day_month_year_is_zero_padded() {
    assert_eq!(format_day_month_year(date!(2024 - 03 - 05)), "05/03/2024");
}

#[test]
fn input_date_is_zero_padded() {
    assert_eq!(format_input_date(date!(2024 - 03 - 05)), "2024-03-05");
}

#[test]
fn relative_labels_cover_past_and_future() {
    let today = date!(2025 - 07 - 22);
    assert_eq!(relative_day_label(today, today), "Today");
    assert_eq!(relative_day_label(date!(2025 - 07 - 23), today), "Tomorrow");
    assert_eq!(relative_day_label(date!(2025 - 07 - 21), today), "Yesterday");
    assert_eq!(relative_day_label(date!(2025 - 07 - 27), today), "in 5 days");
    assert_eq!(relative_day_label(date!(2025 - 07 - 19), today), "3 days ago");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("John Manager"), "JM");
    assert_eq!(initials("aarav kumar sharma"), "AK");
    assert_eq!(initials("Cher"), "C");
    assert_eq!(initials("   "), "");
}
