use super::*;
use time::macros::date;

#[test]
fn js_fields_are_zero_based_months() {
    assert_eq!(from_js_fields(2025, 0, 31), Some(date!(2025 - 01 - 31)));
    assert_eq!(from_js_fields(2025, 11, 1), Some(date!(2025 - 12 - 01)));
}

#[test]
fn impossible_fields_are_rejected() {
    assert_eq!(from_js_fields(2025, 12, 1), None);
    assert_eq!(from_js_fields(2025, 1, 30), None);
}

#[test]
fn today_is_after_epoch() {
    assert!(today() > date!(1970 - 01 - 01));
}
