//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that reads page scroll. It owns the shared `NavState`
//! signal and swaps between a transparent and a solid background when the
//! page crosses the scroll threshold.

use leptos::prelude::*;

use crate::content::{NAV_ITEMS, PROFILE};
use crate::state::nav::{NavState, anchor_for};
use crate::util::animation::{NAV_BAR, nav_item};
use crate::util::browser;
use crate::util::in_view::use_mounted;

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let mounted = use_mounted();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let mut next = nav.get_untracked();
            if next.observe_scroll(browser::scroll_y()) {
                nav.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let jump = move |ev: leptos::ev::MouseEvent, anchor: String| {
        if browser::scroll_to_section(&anchor) {
            ev.prevent_default();
        }
    };

    view! {
        <nav
            class=move || format!("{} {}", nav.get().bar_class(), NAV_BAR.class(mounted.get()))
            style=NAV_BAR.style()
        >
            <div class="nav__inner">
                <a class="nav__logo gradient-text" href="#home" on:click=move |ev| jump(ev, "home".to_owned())>
                    {PROFILE.initials}
                </a>
                <div class="nav__items">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let motion = nav_item(i);
                            let anchor = anchor_for(label);
                            let href = format!("#{anchor}");
                            view! {
                                <a
                                    class=move || format!("nav__item {}", motion.class(mounted.get()))
                                    style=motion.style()
                                    href=href
                                    on:click=move |ev| jump(ev, anchor.clone())
                                >
                                    <span>{*label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
