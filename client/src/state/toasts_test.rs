use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Lead created successfully!");
    let b = state.error("Failed to delete lead");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);

    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_classes() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
