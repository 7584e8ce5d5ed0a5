//! Skills section: one card per category with animated proficiency bars.
//!
//! DESIGN
//! ======
//! `skill_cards` flattens the static categories into render models carrying
//! their own timings, so the view is a straight map and the per-entry
//! layout can be tested without a DOM.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::content::{ADDITIONAL_TECHNOLOGIES, SKILL_CATEGORIES, SKILLS_INTRO, SkillCategory};
use crate::state::reveal::AMOUNT_WIDE;
use crate::util::animation::{
    CARD_SPRING, Entrance, Motion, SKILLS_STAGGER, TRAILER, Tween, skill_bar_width, skill_counter, skill_row,
    staggered, tech_tag,
};
use crate::util::in_view::use_reveal;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillRowModel {
    pub name: &'static str,
    pub level: u8,
    pub row: Tween,
    pub counter: Tween,
    pub bar: Tween,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCardModel {
    pub title: &'static str,
    pub icon: &'static str,
    pub motion: Motion,
    pub rows: Vec<SkillRowModel>,
}

#[must_use]
pub fn skill_cards(categories: &[SkillCategory]) -> Vec<SkillCardModel> {
    categories
        .iter()
        .enumerate()
        .map(|(ci, category)| SkillCardModel {
            title: category.title,
            icon: category.icon,
            motion: staggered(Entrance::FadeUp(20), SKILLS_STAGGER, CARD_SPRING, ci),
            rows: category
                .skills
                .iter()
                .enumerate()
                .map(|(si, skill)| {
                    let (row, counter, bar) = skill_row(ci, si);
                    SkillRowModel { name: skill.name, level: skill.level, row, counter, bar }
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn Skills() -> impl IntoView {
    let (node, reveal) = use_reveal(AMOUNT_WIDE);
    let revealed = move || reveal.get().revealed;
    let (counted, set_counted) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if revealed() && !counted.get_untracked() {
            gloo_timers::callback::Timeout::new(crate::util::animation::SKILL_COUNT_DELAY_MS, move || {
                set_counted.set(true);
            })
            .forget();
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_counted;

    view! {
        <section id="skills" class="section section--tinted" node_ref=node>
            <div class="blob blob--drift skills__blob"></div>
            <div class="section__inner">
                <SectionHeading title="Skills & Technologies" subtitle=SKILLS_INTRO reveal=reveal/>

                <div class="skills__grid">
                    {skill_cards(&SKILL_CATEGORIES)
                        .into_iter()
                        .map(|card| {
                            let motion = card.motion;
                            view! {
                                <div class=move || motion.class(revealed()) style=motion.style()>
                                    <div class="card hover-lift skills__card">
                                        <h3 class="card__title">
                                            <span class="icon-pulse">{card.icon}</span>
                                            {card.title}
                                        </h3>
                                        {card
                                            .rows
                                            .into_iter()
                                            .map(|row| skill_row_view(row, reveal, counted))
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || TRAILER.class(revealed()) style=TRAILER.style()>
                    <h3 class="skills__more-title">"Additional Technologies"</h3>
                    <div class="tag-cloud">
                        {ADDITIONAL_TECHNOLOGIES
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                let motion = tech_tag(i);
                                view! {
                                    <span
                                        class=move || format!("tag hover-pop {}", motion.class(revealed()))
                                        style=motion.style()
                                    >
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn skill_row_view(
    row: SkillRowModel,
    reveal: RwSignal<crate::state::reveal::Reveal>,
    counted: ReadSignal<bool>,
) -> impl IntoView {
    let revealed = move || reveal.get().revealed;
    let row_motion = Motion { entrance: Entrance::FadeLeft(20), tween: row.row };
    let level = row.level;
    view! {
        <div class=move || format!("skill {}", row_motion.class(revealed())) style=row_motion.style()>
            <div class="skill__header">
                <span class="skill__name">{row.name}</span>
                <span class="skill__value" style=row.counter.style()>
                    {move || skill_counter(level, counted.get())}
                </span>
            </div>
            <div class="skill__track">
                <div
                    class="skill__bar"
                    style=move || format!("{} {}", row.bar.style(), skill_bar_width(level, revealed()))
                ></div>
            </div>
        </div>
    }
}
