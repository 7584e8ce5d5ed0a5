//! Viewport visibility hook for one-time entrance animations.
//!
//! Each section owns a [`Reveal`] signal fed by an `IntersectionObserver`
//! attached to its root element. The observer disconnects once the section
//! is revealed, so no section keeps a live subscription after its entrance.

use leptos::prelude::*;

use crate::state::reveal::Reveal;

/// Attach a visibility observer to a section and return its node ref plus the
/// reveal signal the section's children read.
pub fn use_reveal(amount: f64) -> (NodeRef<leptos::html::Section>, RwSignal<Reveal>) {
    let node = NodeRef::<leptos::html::Section>::new();
    let reveal = RwSignal::new(Reveal::new(amount));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(element) = node.get() {
            let attached = observe_ratio(&element, amount, move |ratio| {
                reveal.update(|r| {
                    r.observe(ratio);
                });
                reveal.get_untracked().revealed
            });
            if !attached {
                reveal.update(|r| {
                    r.observe(1.0);
                });
            }
        }
    });

    (node, reveal)
}

/// Call `on_ratio` with each intersection ratio until it returns `true`.
///
/// Returns `false` when the browser has no `IntersectionObserver`; callers
/// reveal immediately in that case so content is never stuck hidden.
#[cfg(feature = "hydrate")]
fn observe_ratio(element: &web_sys::Element, amount: f64, mut on_ratio: impl FnMut(f64) -> bool + 'static) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::{Closure, JsValue};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() && on_ratio(entry.intersection_ratio()) {
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(amount));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            // The observer holds the callback for the lifetime of the page.
            callback.forget();
            true
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            false
        }
    }
}

/// A flag that turns `true` once the page has hydrated.
///
/// Load-time entrances (navigation, hero) key off this instead of viewport
/// visibility; the server always renders them hidden.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move || set_mounted.set(true));
    mounted
}
