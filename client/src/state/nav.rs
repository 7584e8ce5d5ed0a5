//! Navigation bar scroll state.
//!
//! The bar is transparent at the top of the page and switches to a solid
//! background once the page scrolls past a fixed threshold.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical scroll offset past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
}

impl NavState {
    /// Record a scroll position. Returns `true` only when the bar's visual
    /// state changed, so each threshold crossing yields exactly one toggle.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let next = scroll_y > SCROLL_THRESHOLD_PX;
        if next == self.scrolled {
            return false;
        }
        self.scrolled = next;
        true
    }

    /// CSS modifier class for the current background style.
    #[must_use]
    pub fn bar_class(&self) -> &'static str {
        if self.scrolled { "nav nav--solid" } else { "nav nav--transparent" }
    }
}

/// Anchor id of the section a navigation label scrolls to.
#[must_use]
pub fn anchor_for(label: &str) -> String {
    label.to_ascii_lowercase()
}
