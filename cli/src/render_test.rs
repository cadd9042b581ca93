use super::*;
use schema::{CategoryRef, LeadStatus, Priority};
use time::macros::date;

fn lead() -> Lead {
    Lead {
        id: "l1".to_owned(),
        name: "Asha Rao".to_owned(),
        email: Some("asha@example.com".to_owned()),
        phone: None,
        position: Some("CTO".to_owned()),
        lead_source: Some("Referral".to_owned()),
        notes: None,
        status: LeadStatus::FollowUp,
        priority: Priority::High,
        category: Some(CategoryRef { id: "c1".to_owned(), title: "Sales".to_owned(), color: "#111111".to_owned() }),
        category_id: Some("c1".to_owned()),
        assigned_to: Some("Aarav".to_owned()),
        follow_up_dates: vec![date!(2025 - 07 - 01), date!(2025 - 07 - 15)],
        last_contact: None,
        created_at: Some(date!(2025 - 06 - 20)),
        documents: Vec::new(),
    }
}

#[test]
fn fit_truncates_with_ellipsis() {
    assert_eq!(fit("short", 10), "short");
    assert_eq!(fit("abcdefghij", 5), "abcd…");
    assert_eq!(fit("", 3), "");
}

#[test]
fn lead_table_has_header_and_row() {
    let out = lead_table(&[lead()]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].contains("Asha Rao"));
    assert!(lines[1].contains("Sales"));
    assert!(lines[1].contains("15/07/2025"));
}

#[test]
fn empty_lead_table_says_so() {
    assert_eq!(lead_table(&[]), "No leads found.\n");
}

#[test]
fn detail_lists_fallback_labels() {
    let out = lead_detail(&lead());
    assert!(out.contains("Phone        No Phone Number"));
    assert!(out.contains("Follow-ups   2025-07-01, 2025-07-15"));
    assert!(out.contains("Last contact 20/06/2025"));
}

#[test]
fn pagination_line_reads_naturally() {
    let p = Pagination { current_page: 2, total_pages: 5 };
    assert_eq!(pagination_line(p, 10), "page 2 of 5 (10 shown)");
}

#[test]
fn whoami_includes_email_when_known() {
    let user = CurrentUser { name: "Priya".to_owned(), email: Some("priya@example.com".to_owned()) };
    assert_eq!(whoami(&user), "Priya <priya@example.com>");
    assert_eq!(whoami(&CurrentUser { name: "Priya".to_owned(), email: None }), "Priya");
}
