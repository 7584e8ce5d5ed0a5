//! Projects section: cards with tech tags and repository/demo links.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::content::{PROFILE, PROJECTS, PROJECTS_INTRO, Project};
use crate::state::reveal::AMOUNT_TALL;
use crate::util::animation::{CARD_SPRING, Entrance, Motion, PROJECTS_STAGGER, TRAILER, staggered};
use crate::util::in_view::use_reveal;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCardModel {
    pub project: Project,
    pub monogram: char,
    pub motion: Motion,
}

#[must_use]
pub fn project_cards(projects: &[Project]) -> Vec<ProjectCardModel> {
    projects
        .iter()
        .enumerate()
        .map(|(i, project)| ProjectCardModel {
            project: *project,
            monogram: project.monogram(),
            motion: staggered(Entrance::FadeUp(20), PROJECTS_STAGGER, CARD_SPRING, i),
        })
        .collect()
}

#[component]
pub fn Projects() -> impl IntoView {
    let (node, reveal) = use_reveal(AMOUNT_TALL);
    let revealed = move || reveal.get().revealed;

    view! {
        <section id="projects" class="section section--tinted" node_ref=node>
            <div class="blob blob--drift projects__blob-a"></div>
            <div class="blob blob--drift-reverse projects__blob-b"></div>

            <div class="section__inner">
                <SectionHeading title="Featured Projects" subtitle=PROJECTS_INTRO reveal=reveal/>

                <div class="projects__grid">
                    {project_cards(&PROJECTS)
                        .into_iter()
                        .map(|card| {
                            let motion = card.motion;
                            let project = card.project;
                            view! {
                                <div class=move || motion.class(revealed()) style=motion.style()>
                                    <article class="card hover-lift project">
                                        <Show when=move || project.featured>
                                            <span class="badge badge--featured">"Featured"</span>
                                        </Show>
                                        <div class="project__cover">
                                            <span class="project__monogram">{card.monogram}</span>
                                        </div>
                                        <div class="project__body">
                                            <h3 class="card__title">{project.title}</h3>
                                            <p class="card__muted">{project.description}</p>
                                            <div class="tag-cloud tag-cloud--left">
                                                {project
                                                    .tech_stack
                                                    .iter()
                                                    .map(|tech| view! { <span class="tag">{*tech}</span> })
                                                    .collect_view()}
                                            </div>
                                            <div class="project__links">
                                                <a
                                                    class="button button--outline"
                                                    href=project.github_url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                >
                                                    "Code"
                                                </a>
                                                {project
                                                    .demo_url
                                                    .map(|url| {
                                                        view! {
                                                            <a
                                                                class="button button--primary"
                                                                href=url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                            >
                                                                "Demo"
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </article>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || format!("section__trailer {}", TRAILER.class(revealed())) style=TRAILER.style()>
                    <a
                        class="button button--outline button--large hover-pop"
                        href=PROFILE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
