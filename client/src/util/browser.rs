//! Thin wrappers over the browser `window` used by the sections.
//!
//! Every helper is a no-op (or returns a neutral value) outside the
//! `hydrate` build so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Smoothly scroll the section with the given anchor id into view.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_section(section_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_id;
        false
    }
}

/// Current vertical scroll offset of the page in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
