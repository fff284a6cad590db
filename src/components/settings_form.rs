//! Site Settings Form Component
//!
//! Admin screen for site-wide settings. The form is seeded once from the
//! cached settings and edited locally until saved.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::SiteSettings;

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_app_context();

    let settings = use_query::<SiteSettings, _, _>(ctx.cache, keys::site_settings(), || async {
        to_slot_value(api::site_settings().await)
    });

    let (site_title, set_site_title) = signal(String::new());
    let (tagline, set_tagline) = signal(String::new());
    let (about_text, set_about_text) = signal(String::new());
    let (contact_email, set_contact_email) = signal(String::new());
    let (seeded, set_seeded) = signal(false);
    let (pending, set_pending) = signal(false);

    // Seed the form once the settings arrive; later refetches must not
    // clobber in-progress edits
    Effect::new(move |_| {
        if seeded.get() {
            return;
        }
        if let Some(loaded) = settings.data.get() {
            set_site_title.set(loaded.site_title);
            set_tagline.set(loaded.tagline);
            set_about_text.set(loaded.about_text);
            set_contact_email.set(loaded.contact_email);
            set_seeded.set(true);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let payload = SiteSettings {
            site_title: site_title.get(),
            tagline: tagline.get(),
            about_text: about_text.get(),
            contact_email: contact_email.get(),
            // Link editing lives elsewhere; carry the loaded value through
            social_links: settings.data.get().map(|s| s.social_links).unwrap_or_default(),
        };
        set_pending.set(true);
        spawn_local(async move {
            match api::save_site_settings(&payload).await {
                Ok(()) => {
                    ctx.cache.invalidate(&keys::site_settings());
                    ctx.toast_info("Settings saved".to_string());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="settings-form" on:submit=submit>
            <h1>"Site settings"</h1>
            {move || (settings.loading.get()).then(|| view! { <p>"Loading..."</p> })}
            <input
                type="text"
                placeholder="Site title"
                prop:value=move || site_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_site_title.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Tagline"
                prop:value=move || tagline.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_tagline.set(input.value());
                }
            />
            <textarea
                placeholder="About"
                prop:value=move || about_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_about_text.set(area.value());
                }
            />
            <input
                type="email"
                placeholder="Contact email"
                prop:value=move || contact_email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_contact_email.set(input.value());
                }
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { "Save settings" }}
            </button>
        </form>
    }
}
