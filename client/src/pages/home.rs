//! The single portfolio page: every section stacked in order.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, hero::Hero, navigation::Navigation,
    projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Experience/>
            <Contact/>
        </div>
    }
}
