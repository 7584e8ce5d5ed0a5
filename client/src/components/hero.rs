//! Landing section with photo, name, résumé download, and social links.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::animation::{CARD_SPRING, Entrance, HERO_STAGGER, hero_particles, staggered};
use crate::util::in_view::use_mounted;

#[component]
pub fn Hero() -> impl IntoView {
    let mounted = use_mounted();
    let item = move |index: usize| staggered(Entrance::FadeUp(20), HERO_STAGGER, CARD_SPRING, index);
    let class_for = move |index: usize| move || item(index).class(mounted.get());

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop">
                <div class="blob blob--float hero__blob-a"></div>
                <div class="blob blob--float blob--delayed hero__blob-b"></div>
                <div class="blob blob--spin hero__halo"></div>
                {hero_particles()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()}
            </div>

            <div class="hero__content">
                <div class=class_for(0) style=item(0).style()>
                    <div class="hero__photo hover-lift">
                        <img src=PROFILE.image_path alt=PROFILE.name/>
                    </div>
                </div>

                <div class=class_for(1) style=item(1).style()>
                    <h1 class="hero__name gradient-text gradient-text--animated">{PROFILE.name}</h1>
                    <p class="hero__headline">{PROFILE.headline}</p>
                    <p class="hero__tagline">{PROFILE.tagline}</p>
                </div>

                <div class=move || format!("hero__actions {}", class_for(2)()) style=item(2).style()>
                    <a
                        class="button button--primary hover-pop"
                        href=PROFILE.resume_path
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "⤓ Download Resume"
                    </a>
                    <div class="hero__socials">
                        <a
                            class="button button--round button--blue hover-tilt"
                            href=PROFILE.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                        >
                            "in"
                        </a>
                        <a
                            class="button button--round button--gray hover-tilt-left"
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                        >
                            "gh"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
