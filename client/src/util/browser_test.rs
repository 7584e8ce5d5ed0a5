#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_to_section_reports_missing_element_without_browser() {
    assert!(!scroll_to_section("home"));
}

#[test]
fn scroll_y_is_top_of_page_without_browser() {
    assert_eq!(scroll_y(), 0.0);
}
