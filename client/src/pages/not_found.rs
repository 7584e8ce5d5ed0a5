//! Fallback page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <a class="button button--primary" href="/">"Return to Home"</a>
        </div>
    }
}
