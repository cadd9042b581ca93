use super::*;

#[test]
fn badge_class_prefixes_base_class() {
    assert_eq!(badge_class("badge--high"), "badge badge--high");
    assert_eq!(badge_class(&status_badge_class(LeadStatus::FollowUp)), "badge badge--follow-up");
}
