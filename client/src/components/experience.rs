//! Experience section: alternating timeline cards.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::content::{EXPERIENCE, EXPERIENCE_INTRO, ExperienceEntry};
use crate::state::reveal::AMOUNT_TALL;
use crate::util::animation::{
    CARD_SPRING, EXPERIENCE_STAGGER, Entrance, Motion, SOFT_SPRING, TIMELINE, achievement, experience_tag, staggered,
};
use crate::util::in_view::use_reveal;

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceCardModel {
    pub entry: ExperienceEntry,
    /// Cards alternate sides of the timeline; even indices sit on the left.
    pub on_left: bool,
    pub motion: Motion,
    pub achievements: Vec<(&'static str, Motion)>,
    pub tags: Vec<(&'static str, Motion)>,
}

#[must_use]
pub fn experience_cards(entries: &[ExperienceEntry]) -> Vec<ExperienceCardModel> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let on_left = i % 2 == 0;
            let motion = if on_left {
                staggered(Entrance::FadeUp(20), EXPERIENCE_STAGGER, CARD_SPRING, i)
            } else {
                staggered(Entrance::SlideRight(100), EXPERIENCE_STAGGER, SOFT_SPRING, i)
            };
            ExperienceCardModel {
                entry: *entry,
                on_left,
                motion,
                achievements: entry
                    .achievements
                    .iter()
                    .enumerate()
                    .map(|(ai, text)| (*text, achievement(i, ai)))
                    .collect(),
                tags: entry
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(si, tag)| (*tag, experience_tag(i, si)))
                    .collect(),
            }
        })
        .collect()
}

#[component]
pub fn Experience() -> impl IntoView {
    let (node, reveal) = use_reveal(AMOUNT_TALL);
    let revealed = move || reveal.get().revealed;

    view! {
        <section id="experience" class="section section--white" node_ref=node>
            <div class="blob blob--drift experience__blob-a"></div>
            <div class="blob blob--drift-reverse experience__blob-b"></div>

            <div class="section__inner">
                <SectionHeading title="Experience & Internships" subtitle=EXPERIENCE_INTRO reveal=reveal/>

                <div class="timeline">
                    <div class=move || format!("timeline__rail {}", TIMELINE.class(revealed())) style=TIMELINE.style()></div>
                    {experience_cards(&EXPERIENCE)
                        .into_iter()
                        .map(|card| {
                            let motion = card.motion;
                            let entry = card.entry;
                            let side = if card.on_left { "timeline__item timeline__item--left" } else { "timeline__item timeline__item--right" };
                            view! {
                                <div class=side>
                                    <span class=format!("timeline__dot {}", entry.accent.class())></span>
                                    <div class=move || motion.class(revealed()) style=motion.style()>
                                        <article class=format!("card hover-lift experience {}", entry.accent.class())>
                                            <header class="experience__header">
                                                <div>
                                                    <h3 class="card__title">{entry.role}</h3>
                                                    <p class="experience__company">{entry.company}</p>
                                                </div>
                                                <div class="experience__meta">
                                                    <span class="badge">{entry.duration}</span>
                                                    <span class="card__muted">{entry.kind}</span>
                                                </div>
                                            </header>
                                            <p class="card__muted">{entry.description}</p>
                                            <h4 class="experience__subhead">"Key Achievements"</h4>
                                            <ul class="experience__achievements">
                                                {card
                                                    .achievements
                                                    .into_iter()
                                                    .map(|(text, m)| {
                                                        view! {
                                                            <li class=move || m.class(revealed()) style=m.style()>
                                                                <span class="dot dot--pulse"></span>
                                                                {text}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                            <div class="tag-cloud tag-cloud--left">
                                                {card
                                                    .tags
                                                    .into_iter()
                                                    .map(|(tag, m)| {
                                                        view! {
                                                            <span class=move || format!("tag {}", m.class(revealed())) style=m.style()>
                                                                {tag}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </article>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
