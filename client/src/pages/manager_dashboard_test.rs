use super::*;

#[test]
fn percent_label_keeps_one_decimal() {
    assert_eq!(percent_label(18.5), "18.5%");
    assert_eq!(percent_label(20.0), "20%");
    assert_eq!(percent_label(0.0), "0%");
}
