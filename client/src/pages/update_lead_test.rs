use super::*;
use time::macros::date;

fn filled() -> LeadForm {
    LeadForm { name: "Asha Rao".to_owned(), category: "cat-1".to_owned(), ..LeadForm::default() }
}

#[test]
fn parses_follow_up_list_into_form() {
    let prepared = prepare_update(&filled(), "2025-07-01, 2025-07-15").expect("valid form");
    assert_eq!(prepared.follow_up_dates, vec![date!(2025 - 07 - 01), date!(2025 - 07 - 15)]);
}

#[test]
fn blank_follow_up_list_clears_dates() {
    let mut form = filled();
    form.follow_up_dates = vec![date!(2025 - 07 - 01)];
    let prepared = prepare_update(&form, "  ").expect("valid form");
    assert!(prepared.follow_up_dates.is_empty());
}

#[test]
fn bad_date_reported_with_other_errors() {
    let form = LeadForm { category: "cat-1".to_owned(), ..LeadForm::default() };
    let errors = prepare_update(&form, "2025-07-01, next week").expect_err("invalid");
    assert!(errors.get("followUpDates").is_some_and(|m| m.contains("next week")));
    assert_eq!(errors.get("name"), Some("Full name is required"));
}

#[test]
fn email_is_not_required_on_update() {
    assert!(prepare_update(&filled(), "").is_ok());
}
