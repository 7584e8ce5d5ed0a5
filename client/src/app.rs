//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::content::PROFILE;
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::{nav::NavState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The `noscript` rule un-hides reveal targets, which otherwise only become
/// visible once the hydrated observers fire.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <noscript>
                    <style>".reveal { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared navigation and toast state, then routes the single
/// portfolio page with a not-found fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(nav);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | Portfolio", PROFILE.name)/>
        <Meta name="description" content=PROFILE.headline/>

        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}
