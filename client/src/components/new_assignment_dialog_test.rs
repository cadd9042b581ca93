use super::*;
use schema::category::CategoryRef;
use schema::{LeadStatus, Priority};

fn lead(id: &str, worker: Option<&str>, category: Option<&str>) -> Lead {
    Lead {
        id: id.to_owned(),
        name: format!("Lead {id}"),
        email: None,
        phone: None,
        position: None,
        lead_source: None,
        notes: None,
        status: LeadStatus::New,
        priority: Priority::Low,
        category: category.map(|title| CategoryRef {
            id: format!("cat-{title}"),
            title: title.to_owned(),
            color: "#4f46e5".to_owned(),
        }),
        category_id: category.map(|title| format!("cat-{title}")),
        assigned_to: worker.map(ToOwned::to_owned),
        follow_up_dates: Vec::new(),
        last_contact: None,
        created_at: None,
        documents: Vec::new(),
    }
}

#[test]
fn choices_keep_name_and_category_title() {
    let choices = lead_choices(vec![lead("a", None, Some("Sales"))]);
    assert_eq!(
        choices,
        vec![LeadChoice { id: "a".to_owned(), name: "Lead a".to_owned(), category: "Sales".to_owned() }]
    );
}

#[test]
fn choices_skip_assigned_leads_and_label_missing_category() {
    let choices = lead_choices(vec![lead("a", Some("Priya"), Some("Sales")), lead("b", None, None)]);
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].id, "b");
    assert_eq!(choices[0].category, "Un-Categorized");
}
