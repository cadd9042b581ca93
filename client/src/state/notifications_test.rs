use super::*;

#[test]
fn seeded_tray_has_two_unread() {
    let state = NotificationState::seeded();
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn mark_read_and_mark_all() {
    let mut state = NotificationState::seeded();
    state.mark_read(1);
    assert_eq!(state.unread_count(), 1);
    state.mark_read(42);
    assert_eq!(state.unread_count(), 1);
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn delete_and_clear() {
    let mut state = NotificationState::seeded();
    state.delete(2);
    assert!(state.items.iter().all(|n| n.id != 2));
    assert_eq!(state.unread_count(), 1);
    state.clear();
    assert!(state.items.is_empty());
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn long_messages_collapse_until_expanded() {
    let mut state = NotificationState::seeded();
    let first = &state.items[0];
    assert!(first.should_truncate());
    assert!(first.preview().ends_with("..."));
    assert!(first.preview().chars().count() <= TRUNCATE_AT + 3);

    state.toggle_expand(1);
    assert_eq!(state.items[0].preview(), state.items[0].message);
    state.toggle_expand(1);
    assert!(!state.items[0].expanded);
}

#[test]
fn short_messages_never_truncate() {
    let n = Notification::new(9, "Hi", "short", "now", false);
    assert!(!n.should_truncate());
    assert_eq!(n.preview(), "short");
}
