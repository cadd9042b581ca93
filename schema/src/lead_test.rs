use super::*;
use time::macros::date;

fn record(json: serde_json::Value) -> LeadRecord {
    serde_json::from_value(json).expect("lead record should decode")
}

// =============================================================
// Enums
// =============================================================

#[test]
fn status_serializes_kebab_case() {
    assert_eq!(serde_json::to_string(&LeadStatus::InProgress).unwrap(), "\"in-progress\"");
    assert_eq!(serde_json::to_string(&LeadStatus::FollowUp).unwrap(), "\"follow-up\"");
}

#[test]
fn status_parse_is_lenient_about_separators_and_case() {
    assert_eq!("In Progress".parse::<LeadStatus>(), Ok(LeadStatus::InProgress));
    assert_eq!("follow_up".parse::<LeadStatus>(), Ok(LeadStatus::FollowUp));
    assert_eq!("CLOSED".parse::<LeadStatus>(), Ok(LeadStatus::Closed));
    assert!("qualified".parse::<LeadStatus>().is_err());
}

#[test]
fn priority_parse_accepts_capitalized_values() {
    assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
    assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
    assert_eq!("urgent".parse::<Priority>(), Err(ParseError::Priority("urgent".to_owned())));
}

// =============================================================
// Record -> Lead
// =============================================================

#[test]
fn from_record_resolves_populated_fields() {
    let rec = record(serde_json::json!({
        "id": "l1",
        "name": "John Smith",
        "email": "john@techcorp.com",
        "phoneNumber": 9876543210_u64,
        "position": "CTO",
        "status": "in-progress",
        "priority": "high",
        "category": { "_id": "c1", "title": "Sales", "color": "#4f46e5" },
        "assignedTo": { "name": "Aarav Sharma" },
        "followUpDates": ["2025-07-20T10:00:00.000Z", "2025-07-22T10:00:00.000Z"],
        "createdAt": "2025-07-01T08:30:00.000Z"
    }));
    let lead = Lead::from_record(rec, Priority::Low).expect("lead");

    assert_eq!(lead.id, "l1");
    assert_eq!(lead.phone.as_deref(), Some("9876543210"));
    assert_eq!(lead.status, LeadStatus::InProgress);
    assert_eq!(lead.priority, Priority::High);
    assert_eq!(lead.category_title(), "Sales");
    assert_eq!(lead.category_id.as_deref(), Some("c1"));
    assert_eq!(lead.assigned_to.as_deref(), Some("Aarav Sharma"));
    assert_eq!(lead.latest_follow_up(), Some(date!(2025 - 07 - 22)));
    assert_eq!(lead.follow_up_label(), "22/07/2025");
    assert_eq!(lead.last_contact_label(), "01/07/2025");
}

#[test]
fn from_record_applies_display_fallbacks() {
    let rec = record(serde_json::json!({
        "_id": "l2",
        "name": "Mike Brown",
        "phoneNumber": null,
        "email": "",
        "assignedTo": null,
        "category": null
    }));
    let lead = Lead::from_record(rec, Priority::Low).expect("lead");

    assert_eq!(lead.id, "l2");
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.priority, Priority::Low);
    assert_eq!(lead.position_label(), "Unknown Position");
    assert_eq!(lead.email_label(), "No Email");
    assert_eq!(lead.phone_label(), "No Phone Number");
    assert_eq!(lead.category_title(), "Un-Categorized");
    assert_eq!(lead.category_color(), "#d1d5db");
    assert_eq!(lead.assignee_label(), "Unassigned");
    assert!(!lead.is_assigned());
    assert_eq!(lead.follow_up_label(), "");
}

#[test]
fn from_record_treats_null_or_sentinel_assignee_as_unassigned() {
    let rec = record(serde_json::json!({ "id": "l3", "name": "A", "assignedTo": { "name": null } }));
    assert_eq!(Lead::from_record(rec, Priority::Low).expect("lead").assigned_to, None);

    let rec = record(serde_json::json!({ "id": "l4", "name": "B", "assignedTo": { "name": "Unassigned" } }));
    assert_eq!(Lead::from_record(rec, Priority::Low).expect("lead").assigned_to, None);
}

#[test]
fn bare_assignee_id_counts_as_assigned() {
    let rec = record(serde_json::json!({ "id": "l7", "name": "E", "assignedTo": "65f0c" }));
    let lead = Lead::from_record(rec, Priority::Low).expect("lead");
    assert!(lead.is_assigned());
    assert_eq!(lead.assignee_label(), "65f0c");

    let rec = record(serde_json::json!({ "id": "l8", "name": "F", "assignedTo": "" }));
    assert!(!Lead::from_record(rec, Priority::Low).expect("lead").is_assigned());
}

#[test]
fn null_name_and_arrays_decode_as_empty() {
    let rec = record(serde_json::json!({
        "id": "l9",
        "name": null,
        "followUpDates": null,
        "documents": null,
        "lastContact": null,
        "leadSource": null
    }));
    let lead = Lead::from_record(rec, Priority::Low).expect("lead");
    assert_eq!(lead.name, "");
    assert!(lead.follow_up_dates.is_empty());
    assert!(lead.documents.is_empty());
    assert_eq!(lead.last_contact, None);
    assert_eq!(lead.lead_source, None);
    assert_eq!(lead.follow_up_label(), "");
}

#[test]
fn one_loose_record_does_not_sink_the_page() {
    let page: LeadPageRecord = serde_json::from_value(serde_json::json!({
        "leads": [
            { "id": "a", "name": "A", "followUpDates": null, "documents": null },
            { "id": "b", "name": null, "assignedTo": "65f0c" },
            { "id": "c", "name": "C", "assignedTo": { "_id": "w1", "name": "Priya" } }
        ],
        "pagination": { "currentPage": 1, "totalPages": 1 }
    }))
    .expect("page");
    let page = LeadPage::from(page);
    assert_eq!(page.leads.len(), 3);
    assert_eq!(page.leads[2].assigned_to.as_deref(), Some("Priya"));
}

#[test]
fn null_page_fields_fall_back_to_defaults() {
    let page: LeadPageRecord =
        serde_json::from_value(serde_json::json!({ "leads": null, "pagination": null })).expect("page");
    assert!(page.leads.is_empty());
    assert_eq!(page.pagination, Pagination::default());
}

#[test]
fn from_record_keeps_bare_category_id() {
    let rec = record(serde_json::json!({ "_id": "l5", "name": "C", "category": "cat-9" }));
    let lead = Lead::from_record(rec, Priority::Medium).expect("lead");
    assert_eq!(lead.category, None);
    assert_eq!(lead.category_id.as_deref(), Some("cat-9"));
    assert_eq!(lead.priority, Priority::Medium);
}

#[test]
fn from_record_drops_records_without_id() {
    let rec = record(serde_json::json!({ "name": "Nobody" }));
    assert!(Lead::from_record(rec, Priority::Low).is_none());
}

#[test]
fn from_record_skips_unparseable_follow_up_dates() {
    let rec = record(serde_json::json!({
        "id": "l6",
        "name": "D",
        "followUpDates": ["2025-01-02", "not a date"]
    }));
    let lead = Lead::from_record(rec, Priority::Low).expect("lead");
    assert_eq!(lead.follow_up_dates, vec![date!(2025 - 01 - 02)]);
}

#[test]
fn page_conversion_preserves_pagination() {
    let page: LeadPageRecord = serde_json::from_value(serde_json::json!({
        "leads": [{ "id": "a", "name": "A" }, { "name": "no id" }],
        "pagination": { "currentPage": 2, "totalPages": 5 }
    }))
    .expect("page");
    let page = LeadPage::from(page);
    assert_eq!(page.leads.len(), 1);
    assert_eq!(page.pagination, Pagination { current_page: 2, total_pages: 5 });
    assert!(page.pagination.has_previous());
    assert!(page.pagination.has_next());
}

// =============================================================
// Follow-up payloads
// =============================================================

#[test]
fn follow_up_request_uses_camel_case() {
    let body = FollowUpRequest {
        follow_up_date: "2025-08-01".to_owned(),
        conclusion: "Call back after budget review".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "followUpDate": "2025-08-01", "conclusion": "Call back after budget review" })
    );
}

#[test]
fn close_conversation_maps_outcome_to_profitability() {
    let body = CloseConversationRequest::new(ConversationOutcome::Negative, "  Went with competitor ");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "isProfitable": false, "conclusion": "Went with competitor" })
    );
    assert!(CloseConversationRequest::new(ConversationOutcome::Positive, "Signed").is_profitable);
}
