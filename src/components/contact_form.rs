//! Contact Form Component
//!
//! Validates locally before posting; delivery is the backend's concern.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;
use crate::models::{validate_contact, ContactMessage};

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);
    let (sent, set_sent) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let payload = ContactMessage {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        if let Err(msg) = validate_contact(&payload) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            match api::send_contact(&payload).await {
                Ok(()) => {
                    set_sent.set(true);
                    ctx.toast_info("Message sent".to_string());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="contact-form" on:submit=submit>
            <h1>"Get in touch"</h1>
            {move || sent.get().then(|| view! {
                <p class="form-success">"Thanks - your message is on its way."</p>
            })}
            <input
                type="text"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />
            <textarea
                placeholder="Message"
                prop:value=move || message.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_message.set(area.value());
                }
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Sending..." } else { "Send" }}
            </button>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
