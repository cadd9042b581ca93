use super::*;

#[test]
fn seeded_stats() {
    let book = CampaignBook::seeded();
    assert_eq!(
        book.stats(),
        CampaignStats { total: 3, sent: 2, drafts: 1, messages_sent: 40, recipients: 70, email: 2, sms: 1 }
    );
}

#[test]
fn mark_sent_promotes_draft_once() {
    let mut book = CampaignBook::seeded();
    let today = date!(2025 - 07 - 15);

    assert!(book.mark_sent(3, today));
    let sent = book.get(3).expect("campaign 3");
    assert_eq!(sent.status, CampaignStatus::Sent);
    assert_eq!(sent.sent_count, 30);
    assert_eq!(sent.last_sent, Some(today));

    assert!(!book.mark_sent(3, today));
    assert!(!book.mark_sent(99, today));
    assert_eq!(book.stats().messages_sent, 70);
}

#[test]
fn remove_deletes_only_the_target() {
    let mut book = CampaignBook::seeded();
    assert_eq!(book.remove(2).map(|c| c.id), Some(2));
    assert_eq!(book.all().iter().map(|c| c.id).collect::<Vec<_>>(), [1, 3]);
    assert!(book.remove(2).is_none());
}

#[test]
fn filter_by_search_status_and_kind() {
    let book = CampaignBook::seeded();
    let ids = |f: &CampaignFilter| book.filtered(f).iter().map(|c| c.id).collect::<Vec<_>>();

    assert_eq!(ids(&CampaignFilter::default()), [1, 2, 3]);
    assert_eq!(ids(&CampaignFilter { search: "DEMO".to_owned(), ..Default::default() }), [3]);
    assert_eq!(ids(&CampaignFilter { search: "scm".to_owned(), ..Default::default() }), [1, 2, 3]);
    assert_eq!(ids(&CampaignFilter { status: Some(CampaignStatus::Sent), ..Default::default() }), [1, 2]);
    assert_eq!(
        ids(&CampaignFilter { status: Some(CampaignStatus::Sent), kind: Some(CampaignKind::Email), ..Default::default() }),
        [1]
    );
}

#[test]
fn recipients_follow_campaign_lead_ids() {
    let book = CampaignBook::seeded();
    let names: Vec<_> = book.recipients_of(2).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Bob Johnson", "Charlie Davis"]);
    assert!(book.recipients_of(42).is_empty());
}

#[test]
fn enum_parsing_and_wire_names() {
    assert_eq!("SMS".parse::<CampaignKind>(), Ok(CampaignKind::Sms));
    assert_eq!("draft".parse::<CampaignStatus>(), Ok(CampaignStatus::Draft));
    assert_eq!(
        "fax".parse::<CampaignKind>(),
        Err(ParseError::Campaign { field: "type", value: "fax".to_owned() })
    );
    assert_eq!(serde_json::to_string(&CampaignKind::Sms).unwrap(), "\"sms\"");
}
