//! Toast viewport rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    let last_scheduled = StoredValue::new(0_u64);

    // One dismissal timer per toast, however often the queue changes.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let ids = toasts.with(|t| t.ids_after(last_scheduled.get_value()));
        for id in ids {
            last_scheduled.set_value(id);
            gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DURATION_MS, move || {
                toasts.update(|t| t.dismiss(id));
            })
            .forget();
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <div class=toast.kind.class()>
                    <div class="toast__text">
                        <p class="toast__title">{toast.title.clone()}</p>
                        <p class="toast__description">{toast.description.clone()}</p>
                    </div>
                    <button
                        class="toast__close"
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
