use super::*;
use crate::lead::{LeadStatus, Priority};
use time::macros::date;

// =============================================================
// Helpers
// =============================================================

fn lead(id: &str, name: &str, position: &str, email: &str, assignee: Option<&str>) -> Lead {
    Lead {
        id: id.to_owned(),
        name: name.to_owned(),
        email: Some(email.to_owned()),
        phone: None,
        position: Some(position.to_owned()),
        lead_source: None,
        notes: None,
        status: LeadStatus::New,
        priority: Priority::Low,
        category: None,
        category_id: None,
        assigned_to: assignee.map(ToOwned::to_owned),
        follow_up_dates: Vec::new(),
        last_contact: None,
        created_at: None,
        documents: Vec::new(),
    }
}

fn sample() -> Vec<Lead> {
    vec![
        lead("1", "John Smith", "CTO", "john@techcorp.com", Some("Priya Patel")),
        lead("2", "Sarah Wilson", "Designer", "sarah@studio.io", None),
        lead("3", "Mike Brown", "Store Manager", "mike@retail.com", Some("Aarav Sharma")),
        lead("4", "Johnny Lee", "Engineer", "jl@factory.com", None),
    ]
}

fn ids(leads: &[&Lead]) -> Vec<String> {
    leads.iter().map(|l| l.id.clone()).collect()
}

// =============================================================
// Assignment + worker
// =============================================================

#[test]
fn default_filter_passes_everything() {
    let leads = sample();
    let filter = LeadFilter::default();
    assert!(!filter.is_active());
    assert_eq!(filter.apply(&leads).len(), 4);
}

#[test]
fn assignment_filter_splits_assigned_and_unassigned() {
    let leads = sample();
    let mut filter = LeadFilter::default();

    filter.set_assignment(AssignmentFilter::Assigned);
    assert_eq!(ids(&filter.apply(&leads)), ["1", "3"]);

    filter.set_assignment(AssignmentFilter::Unassigned);
    assert_eq!(ids(&filter.apply(&leads)), ["2", "4"]);
}

#[test]
fn worker_filter_narrows_to_named_worker() {
    let leads = sample();
    let filter = LeadFilter { worker: WorkerFilter::Named("Aarav Sharma".to_owned()), ..LeadFilter::default() };
    assert_eq!(ids(&filter.apply(&leads)), ["3"]);
}

#[test]
fn worker_with_unassigned_yields_nothing() {
    let leads = sample();
    let filter = LeadFilter {
        assignment: AssignmentFilter::Unassigned,
        worker: WorkerFilter::Named("Priya Patel".to_owned()),
        ..LeadFilter::default()
    };
    assert!(filter.apply(&leads).is_empty());
}

#[test]
fn choosing_unassigned_resets_worker() {
    let mut filter = LeadFilter { worker: WorkerFilter::Named("Priya Patel".to_owned()), ..LeadFilter::default() };
    filter.set_assignment(AssignmentFilter::Unassigned);
    assert_eq!(filter.worker, WorkerFilter::All);

    filter.worker = WorkerFilter::Named("Priya Patel".to_owned());
    filter.set_assignment(AssignmentFilter::Assigned);
    assert_eq!(filter.worker, WorkerFilter::Named("Priya Patel".to_owned()));
}

// =============================================================
// Search + date
// =============================================================

#[test]
fn unassigned_plus_search_matches_name_position_or_email() {
    let leads = sample();
    let mut filter = LeadFilter { search: "JOHN".to_owned(), ..LeadFilter::default() };
    filter.set_assignment(AssignmentFilter::Unassigned);
    assert_eq!(ids(&filter.apply(&leads)), ["4"]);

    filter.search = "studio".to_owned();
    assert_eq!(ids(&filter.apply(&leads)), ["2"]);

    filter.search = "engineer".to_owned();
    assert_eq!(ids(&filter.apply(&leads)), ["4"]);
}

#[test]
fn blank_search_is_ignored() {
    let leads = sample();
    let filter = LeadFilter { search: "   ".to_owned(), ..LeadFilter::default() };
    assert_eq!(filter.apply(&leads).len(), 4);
}

#[test]
fn follow_up_date_matches_latest_entry_only() {
    let mut leads = sample();
    leads[0].follow_up_dates = vec![date!(2025 - 07 - 20), date!(2025 - 07 - 22)];
    leads[1].follow_up_dates = vec![date!(2025 - 07 - 22), date!(2025 - 07 - 25)];

    let filter = LeadFilter { follow_up_on: Some(date!(2025 - 07 - 22)), ..LeadFilter::default() };
    assert_eq!(ids(&filter.apply(&leads)), ["1"]);
}

// =============================================================
// Options
// =============================================================

#[test]
fn worker_options_are_sorted_and_distinct() {
    let mut leads = sample();
    leads.push(lead("5", "Extra", "Ops", "e@x.com", Some("Aarav Sharma")));
    assert_eq!(worker_options(&leads), ["All", "Aarav Sharma", "Priya Patel"]);
}

#[test]
fn worker_options_with_no_assignees_is_only_all() {
    assert_eq!(worker_options(&[]), ["All"]);
}

#[test]
fn worker_choice_parsing() {
    assert_eq!(WorkerFilter::from_choice("All"), WorkerFilter::All);
    assert_eq!(WorkerFilter::from_choice(""), WorkerFilter::All);
    assert_eq!(WorkerFilter::from_choice("Rohan"), WorkerFilter::Named("Rohan".to_owned()));
    assert_eq!(AssignmentFilter::from_label("unassigned"), Some(AssignmentFilter::Unassigned));
    assert_eq!(AssignmentFilter::from_label("maybe"), None);
}
