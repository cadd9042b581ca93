use super::*;
use crate::category::CategoryRef;
use time::macros::date;

fn lead(id: &str, category: &str, worker: Option<&str>, status: LeadStatus, priority: Priority) -> Lead {
    Lead {
        id: id.to_owned(),
        name: format!("Lead {id}"),
        email: None,
        phone: None,
        position: None,
        lead_source: None,
        notes: None,
        status,
        priority,
        category: Some(CategoryRef { id: category.to_lowercase(), title: category.to_owned(), color: "#000000".to_owned() }),
        category_id: Some(category.to_lowercase()),
        assigned_to: worker.map(ToOwned::to_owned),
        follow_up_dates: Vec::new(),
        last_contact: None,
        created_at: None,
        documents: Vec::new(),
    }
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn groups_assigned_leads_by_category_and_worker() {
    let mut leads = vec![
        lead("1", "Retail", Some("Bob"), LeadStatus::New, Priority::Low),
        lead("2", "Retail", Some("Bob"), LeadStatus::InProgress, Priority::High),
        lead("3", "Tech", Some("Alice"), LeadStatus::Closed, Priority::Medium),
        lead("4", "Tech", None, LeadStatus::New, Priority::High),
    ];
    leads[0].follow_up_dates = vec![date!(2025 - 07 - 25)];
    leads[1].follow_up_dates = vec![date!(2025 - 07 - 21)];

    let rows = Assignment::group_leads(&leads);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].category, "Retail");
    assert_eq!(rows[0].assigned_to, "Bob");
    assert_eq!(rows[0].lead_count, 2);
    assert_eq!(rows[0].priority, Priority::High);
    assert_eq!(rows[0].status, AssignmentStatus::Active);
    assert_eq!(rows[0].due_date, Some(date!(2025 - 07 - 21)));

    assert_eq!(rows[1].category, "Tech");
    assert_eq!(rows[1].status, AssignmentStatus::Completed);
    assert_eq!(rows[1].due_date, None);
}

#[test]
fn overdue_is_derived_from_due_date() {
    let mut leads = vec![lead("1", "Retail", Some("Bob"), LeadStatus::New, Priority::Low)];
    leads[0].follow_up_dates = vec![date!(2025 - 07 - 20)];
    let rows = Assignment::group_leads(&leads);

    assert_eq!(rows[0].effective_status(date!(2025 - 07 - 20)), AssignmentStatus::Active);
    assert_eq!(rows[0].effective_status(date!(2025 - 07 - 21)), AssignmentStatus::Overdue);
}

#[test]
fn summary_counts_each_status() {
    let mut leads = vec![
        lead("1", "A", Some("w1"), LeadStatus::New, Priority::Low),
        lead("2", "B", Some("w1"), LeadStatus::Closed, Priority::Low),
        lead("3", "C", Some("w2"), LeadStatus::FollowUp, Priority::Low),
    ];
    leads[2].follow_up_dates = vec![date!(2025 - 01 - 01)];
    let rows = Assignment::group_leads(&leads);

    let summary = AssignmentSummary::tally(&rows, date!(2025 - 02 - 01));
    assert_eq!(summary, AssignmentSummary { total: 3, active: 1, completed: 1, overdue: 1 });
}

// =============================================================
// Request
// =============================================================

#[test]
fn request_validation_and_wire_shape() {
    let mut req = AssignLeadsRequest::default();
    let errors = req.validate().unwrap_err();
    assert_eq!(errors.len(), 4);

    req.category = "c1".to_owned();
    req.worker_id = "w1".to_owned();
    req.due_date = "2025-08-01".to_owned();
    req.toggle_lead("l1");
    req.toggle_lead("l2");
    req.toggle_lead("l1");
    assert_eq!(req.lead_ids, ["l2"]);
    assert_eq!(req.validate(), Ok(()));

    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "category": "c1",
            "workerId": "w1",
            "leadIds": ["l2"],
            "priority": "medium",
            "dueDate": "2025-08-01"
        })
    );
}
