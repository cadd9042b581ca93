use super::*;

#[test]
fn all_selects_everything() {
    assert_eq!(parse_choice::<CampaignStatus>("all"), None);
    assert_eq!(parse_choice::<CampaignKind>("All"), None);
}

#[test]
fn known_values_parse() {
    assert_eq!(parse_choice::<CampaignStatus>("draft"), Some(CampaignStatus::Draft));
    assert_eq!(parse_choice::<CampaignKind>("sms"), Some(CampaignKind::Sms));
}

#[test]
fn unknown_values_select_everything() {
    assert_eq!(parse_choice::<CampaignStatus>("archived"), None);
}
