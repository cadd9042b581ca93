use super::*;

#[test]
fn managers_get_assigned_to_column() {
    let headers = column_headers(true);
    assert_eq!(headers.len(), 9);
    assert_eq!(headers[5], "Assigned To");
}

#[test]
fn workers_keep_category_but_lose_assignee() {
    let headers = column_headers(false);
    assert_eq!(headers.len(), 8);
    assert!(headers.contains(&"Category"));
    assert!(!headers.contains(&"Assigned To"));
    assert_eq!(headers.last(), Some(&"Actions"));
}
