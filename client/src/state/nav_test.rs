use super::*;

#[test]
fn nav_state_default_is_transparent() {
    let state = NavState::default();
    assert!(!state.scrolled);
    assert_eq!(state.bar_class(), "nav nav--transparent");
}

#[test]
fn observe_scroll_toggles_once_when_crossing_down() {
    let mut state = NavState::default();
    assert!(!state.observe_scroll(10.0));
    assert!(state.observe_scroll(51.0));
    assert!(state.scrolled);
    assert!(!state.observe_scroll(80.0));
    assert!(!state.observe_scroll(400.0));
    assert_eq!(state.bar_class(), "nav nav--solid");
}

#[test]
fn observe_scroll_toggles_once_when_crossing_up() {
    let mut state = NavState { scrolled: true };
    assert!(!state.observe_scroll(60.0));
    assert!(state.observe_scroll(20.0));
    assert!(!state.scrolled);
    assert!(!state.observe_scroll(0.0));
}

#[test]
fn threshold_itself_counts_as_not_scrolled() {
    let mut state = NavState::default();
    assert!(!state.observe_scroll(SCROLL_THRESHOLD_PX));
    assert!(!state.scrolled);
}

#[test]
fn jitter_on_one_side_never_flickers() {
    let mut state = NavState::default();
    let toggles = [49.0, 50.0, 49.5, 48.0, 50.0]
        .iter()
        .filter(|y| state.observe_scroll(**y))
        .count();
    assert_eq!(toggles, 0);

    let toggles = [50.5, 51.0, 50.1, 52.0]
        .iter()
        .filter(|y| state.observe_scroll(**y))
        .count();
    assert_eq!(toggles, 1);
}

#[test]
fn toggle_count_matches_crossing_count() {
    let mut state = NavState::default();
    let path = [0.0, 100.0, 120.0, 30.0, 20.0, 70.0, 10.0];
    let toggles = path.iter().filter(|y| state.observe_scroll(**y)).count();
    assert_eq!(toggles, 4);
}

#[test]
fn anchor_for_lowercases_labels() {
    assert_eq!(anchor_for("Home"), "home");
    assert_eq!(anchor_for("Experience"), "experience");
}
