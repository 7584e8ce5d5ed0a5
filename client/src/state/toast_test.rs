use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a", "");
    let b = state.push(ToastKind::Error, "b", "");
    assert!(b > a);
}

#[test]
fn push_replaces_visible_toast_at_limit() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "first", "one");
    state.push(ToastKind::Error, "second", "two");
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert_eq!(state.toasts[0].title, "second");
    assert_eq!(state.count_of(ToastKind::Success), 0);
    assert_eq!(state.count_of(ToastKind::Error), 1);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "hi", "there");
    state.dismiss(id + 100);
    assert_eq!(state.toasts.len(), 1);
    state.dismiss(id);
    assert!(state.toasts.is_empty());
}

#[test]
fn dismissing_stale_id_keeps_newer_toast() {
    let mut state = ToastState::default();
    let old = state.push(ToastKind::Success, "old", "");
    state.push(ToastKind::Success, "new", "");
    state.dismiss(old);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "new");
}

#[test]
fn toast_kind_classes_are_distinct() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}

#[test]
fn ids_after_skips_already_scheduled_toasts() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "first", "");
    assert_eq!(state.ids_after(0), [first]);
    assert!(state.ids_after(first).is_empty());

    state.dismiss(first + 100);
    assert!(state.ids_after(first).is_empty());

    let second = state.push(ToastKind::Error, "second", "");
    assert_eq!(state.ids_after(first), [second]);
}
