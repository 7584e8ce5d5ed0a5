//! About section: education, certifications, and a short narrative.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::content::{ABOUT_INTRO, CERTIFICATIONS, EDUCATION, JOURNEY};
use crate::state::reveal::AMOUNT_WIDE;
use crate::util::animation::{ABOUT_STAGGER, Entrance, SOFT_SPRING, certification, staggered};
use crate::util::in_view::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let (node, reveal) = use_reveal(AMOUNT_WIDE);
    let revealed = move || reveal.get().revealed;
    let column = move |index: usize| staggered(Entrance::FadeUp(50), ABOUT_STAGGER, SOFT_SPRING, index);

    view! {
        <section id="about" class="section section--white" node_ref=node>
            <div class="blob blob--pulse about__blob-a"></div>
            <div class="blob blob--pulse-reverse about__blob-b"></div>

            <div class="section__inner">
                <SectionHeading title="About Me" subtitle=ABOUT_INTRO reveal=reveal/>

                <div class="about__grid">
                    <div class="about__cards">
                        <div class=move || column(0).class(revealed()) style=column(0).style()>
                            <div class="card hover-lift">
                                <div class="card__row">
                                    <div class="icon-badge icon-badge--blue">"🎓"</div>
                                    <div>
                                        <h3 class="card__title">"Education"</h3>
                                        <p class="about__degree">{EDUCATION.degree}</p>
                                        <p class="card__muted">{EDUCATION.institution}</p>
                                        <p class="about__grade">{EDUCATION.grade}</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class=move || column(1).class(revealed()) style=column(1).style()>
                            <div class="card hover-lift">
                                <div class="card__row">
                                    <div class="icon-badge icon-badge--indigo">"🏅"</div>
                                    <div>
                                        <h3 class="card__title">"Certifications"</h3>
                                        <ul class="about__certs">
                                            {CERTIFICATIONS
                                                .iter()
                                                .enumerate()
                                                .map(|(i, cert)| {
                                                    let motion = certification(i);
                                                    view! {
                                                        <li class=move || motion.class(revealed()) style=motion.style()>
                                                            <span class="dot dot--pulse"></span>
                                                            {*cert}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class=move || column(2).class(revealed()) style=column(2).style()>
                        <div class="card card--gradient about__journey">
                            <h3 class="card__title">"My Journey"</h3>
                            {JOURNEY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
