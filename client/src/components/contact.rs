//! Contact section: owner details, social links, and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is the page's only mutable state and its only network call. The
//! component wires DOM events to `ContactFlow`; the submit handler performs a
//! single best-effort `POST /api/contact` per click and reports the outcome
//! through the shared toast signal.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::content::{CONTACT_INTRO, PROFILE, contact_info_rows};
use crate::state::contact::{ContactField, ContactFlow, ContactFormError};
use crate::state::reveal::AMOUNT_TALL;
use crate::state::toast::ToastState;
use crate::util::animation::{CONTACT_STAGGER, Entrance, SOFT_SPRING, TRAILER, staggered};
use crate::util::in_view::use_reveal;

#[component]
pub fn Contact() -> impl IntoView {
    let (node, reveal) = use_reveal(AMOUNT_TALL);
    let revealed = move || reveal.get().revealed;
    let column = move |index: usize| staggered(Entrance::FadeUp(50), CONTACT_STAGGER, SOFT_SPRING, index);

    let flow = RwSignal::new(ContactFlow::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match flow.try_update(ContactFlow::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(ContactFormError::AlreadySending)) | None => return,
            Some(Err(e)) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&request).await;
            if let Err(e) = &result {
                log::error!("contact relay failed: {e}");
            }
            let outcome = crate::state::contact::SubmitOutcome::from(result);
            flow.update(|f| toasts.update(|t| f.finish(&outcome, t)));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, toasts);
    };

    view! {
        <section id="contact" class="section section--white" node_ref=node>
            <div class="blob blob--pulse contact__blob-a"></div>
            <div class="blob blob--pulse-reverse contact__blob-b"></div>

            <div class="section__inner">
                <SectionHeading title="Get In Touch" subtitle=CONTACT_INTRO reveal=reveal/>

                <div class="contact__grid">
                    <div class=move || format!("contact__aside {}", column(0).class(revealed())) style=column(0).style()>
                        <div class="card hover-lift">
                            <h3 class="card__title">"📧 Contact Information"</h3>
                            {contact_info_rows(&PROFILE)
                                .into_iter()
                                .map(|row| {
                                    let info = match row.href {
                                        Some(href) => view! { <a href=href>{row.info}</a> }.into_any(),
                                        None => view! { <span>{row.info}</span> }.into_any(),
                                    };
                                    view! {
                                        <div class="contact__row hover-nudge">
                                            <div class="icon-badge">{row.icon}</div>
                                            <div>
                                                <p class="contact__row-title">{row.title}</p>
                                                <p class="card__muted">{info}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="card hover-lift">
                            <h3 class="card__title">"Connect With Me"</h3>
                            <a class="button button--outline button--block" href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer">
                                "LinkedIn Profile"
                            </a>
                            <a class="button button--outline button--block" href=PROFILE.github_url target="_blank" rel="noopener noreferrer">
                                "GitHub Profile"
                            </a>
                        </div>
                    </div>

                    <div class=move || format!("contact__main {}", column(1).class(revealed())) style=column(1).style()>
                        <div class="card">
                            <h3 class="card__title">"✉️ Send Me a Message"</h3>
                            <form class="contact-form" on:submit=on_submit>
                                <div class="contact-form__pair">
                                    {field_input(flow, ContactField::Name, "text", "Your full name")}
                                    {field_input(flow, ContactField::Email, "email", "your.email@example.com")}
                                </div>
                                {field_input(flow, ContactField::Subject, "text", "What's this about?")}
                                <div class="contact-form__field">
                                    <label for="message">{ContactField::Message.label()}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        placeholder="Your message..."
                                        required
                                        prop:value=move || flow.with(|f| f.form.message.clone())
                                        on:input=move |ev| flow.update(|f| f.form.set(ContactField::Message, event_target_value(&ev)))
                                    ></textarea>
                                </div>
                                <Show when=move || form_error.get().is_some()>
                                    <p class="contact-form__error">{move || form_error.get().unwrap_or_default()}</p>
                                </Show>
                                <button
                                    class="button button--primary button--block button--large"
                                    type="submit"
                                    disabled=move || flow.with(ContactFlow::is_sending)
                                >
                                    {move || flow.with(ContactFlow::button_label)}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>

                <footer class=move || format!("footer {}", TRAILER.class(revealed())) style=TRAILER.style()>
                    <p class="card__muted">{PROFILE.copyright}</p>
                    <div class="footer__links">
                        <a class="icon-link hover-tilt" href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            "in"
                        </a>
                        <a class="icon-link hover-tilt-left" href=PROFILE.github_url target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            "gh"
                        </a>
                    </div>
                </footer>
            </div>
        </section>
    }
}

/// Labelled single-line input bound to one form field.
fn field_input(
    flow: RwSignal<ContactFlow>,
    field: ContactField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="contact-form__field">
            <label for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                placeholder=placeholder
                required
                prop:value=move || flow.with(|f| f.form.get(field).to_owned())
                on:input=move |ev| flow.update(|f| f.form.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
