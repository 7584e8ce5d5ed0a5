//! Title + subtitle block shared by every content section.

use leptos::prelude::*;

use crate::state::reveal::Reveal;
use crate::util::animation::{HEADING, SUBTITLE};

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str, reveal: RwSignal<Reveal>) -> impl IntoView {
    let revealed = move || reveal.get().revealed;
    view! {
        <div class=move || HEADING.class(revealed()) style=HEADING.style()>
            <h2 class="section__title gradient-text">{title}</h2>
            <p class=move || format!("section__subtitle {}", SUBTITLE.class(revealed())) style=SUBTITLE.style()>
                {subtitle}
            </p>
        </div>
    }
}
