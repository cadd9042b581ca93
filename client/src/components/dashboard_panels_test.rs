use super::*;

#[test]
fn bar_width_scales_to_largest() {
    assert_eq!(bar_width(5, 10), 50);
    assert_eq!(bar_width(10, 10), 100);
    assert_eq!(bar_width(1, 3), 33);
}

#[test]
fn bar_width_handles_empty_and_overflow() {
    assert_eq!(bar_width(0, 0), 0);
    assert_eq!(bar_width(12, 10), 100);
}
