use super::*;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_owned()).collect()
}

#[test]
fn split_preview_separates_header() {
    let rows = vec![row(&["Full Name", "Email"]), row(&["Raman", "raman@example.com"])];
    let (header, body) = split_preview(rows, PREVIEW_LIMIT);
    assert_eq!(header, row(&["Full Name", "Email"]));
    assert_eq!(body, vec![row(&["Raman", "raman@example.com"])]);
}

#[test]
fn split_preview_caps_body_rows() {
    let rows: Vec<Vec<String>> = (0..25).map(|i| vec![i.to_string()]).collect();
    let (header, body) = split_preview(rows, 10);
    assert_eq!(header, vec!["0".to_owned()]);
    assert_eq!(body.len(), 10);
    assert_eq!(body[9], vec!["10".to_owned()]);
}

#[test]
fn split_preview_of_nothing() {
    let (header, body) = split_preview(Vec::new(), PREVIEW_LIMIT);
    assert!(header.is_empty());
    assert!(body.is_empty());
}
