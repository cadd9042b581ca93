use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use schema::Priority;
use tokio::time::Instant;

fn lead(id: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_owned(),
        name: format!("Lead {id}"),
        email: None,
        phone: None,
        position: None,
        lead_source: None,
        notes: None,
        status,
        priority: Priority::Medium,
        category: None,
        category_id: None,
        assigned_to: None,
        follow_up_dates: Vec::new(),
        last_contact: None,
        created_at: None,
        documents: Vec::new(),
    }
}

// =============================================================
// Delta
// =============================================================

#[test]
fn delta_reports_added_removed_and_moved() {
    let before = vec![lead("1", LeadStatus::New), lead("2", LeadStatus::New)];
    let after = vec![lead("1", LeadStatus::Closed), lead("3", LeadStatus::New)];
    let delta = LeadDelta::between(&before, &after);
    assert_eq!(delta.added, vec!["Lead 3".to_owned()]);
    assert_eq!(delta.removed, vec!["Lead 2".to_owned()]);
    assert_eq!(delta.status_changed, vec![("Lead 1".to_owned(), LeadStatus::New, LeadStatus::Closed)]);
    assert_eq!(delta.lines(), vec!["+ Lead 3", "- Lead 2", "~ Lead 1: new -> closed"]);
}

#[test]
fn identical_polls_have_no_delta() {
    let page = vec![lead("1", LeadStatus::InProgress)];
    assert!(LeadDelta::between(&page, &page).is_empty());
}

// =============================================================
// Loop
// =============================================================

#[tokio::test(start_paused = true)]
async fn polls_immediately_then_on_interval() {
    let start = Instant::now();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let polls = run(Duration::from_secs(600), Some(3), |_| {
        let seen = Rc::clone(&seen);
        async move {
            seen.borrow_mut().push(start.elapsed());
            Ok(())
        }
    })
    .await;
    assert_eq!(polls, 3);
    assert_eq!(*seen.borrow(), vec![Duration::ZERO, Duration::from_secs(600), Duration::from_secs(1200)]);
}

#[tokio::test(start_paused = true)]
async fn failed_poll_does_not_stop_watch() {
    let polls = run(Duration::from_secs(1), Some(2), |n| async move {
        if n == 0 { Err(CliError::Invalid("boom".to_owned())) } else { Ok(()) }
    })
    .await;
    assert_eq!(polls, 2);
}

#[tokio::test(start_paused = true)]
async fn zero_max_polls_never_polls() {
    let polls = run(Duration::from_secs(1), Some(0), |_| async { Ok(()) }).await;
    assert_eq!(polls, 0);
}
