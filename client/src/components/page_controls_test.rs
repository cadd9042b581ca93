use super::*;

#[test]
fn page_label_shows_position() {
    assert_eq!(page_label(Pagination { current_page: 2, total_pages: 5 }), "Page 2 of 5");
}

#[test]
fn page_label_never_reports_zero_pages() {
    assert_eq!(page_label(Pagination { current_page: 1, total_pages: 0 }), "Page 1 of 1");
}
