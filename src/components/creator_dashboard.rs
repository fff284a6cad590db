//! Creator Dashboard Component
//!
//! A creator's own corner: their items with inline title/description edits,
//! and their public profile. Reachable by creators and admins.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::{validate_item, CreatorProfile, ItemDraft, PortfolioItem};

/// One owned item with an expandable edit form
#[component]
fn CreatorItemRow(item: PortfolioItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(item.title.clone());
    let (description, set_description) = signal(item.description.clone());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let base = item.clone();
    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let draft = ItemDraft {
            title: title.get(),
            description: description.get(),
            image_url: base.image_url.clone(),
            category: base.category.clone(),
            author: base.author.clone(),
            tags: base.tags.clone(),
            marketplace_links: base.marketplace_links.clone(),
        };
        if let Err(msg) = validate_item(&draft) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            match api::update_item(id, &draft).await {
                Ok(updated) => {
                    ctx.cache.invalidate(&keys::creator_items());
                    ctx.cache.invalidate(&keys::items_all());
                    ctx.cache.invalidate(&keys::items_by_category(&updated.category));
                    ctx.cache.invalidate(&keys::items_by_author(&updated.author));
                    ctx.toast_info(format!("Updated \"{}\"", updated.title));
                    set_editing.set(false);
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <li class="creator-item-row">
            <img class="creator-item-thumb" src=item.image_url.clone() alt=item.title.clone()/>
            <span class="creator-item-title">{move || title.get()}</span>
            <button on:click=move |_| set_editing.update(|v| *v = !*v)>
                {move || if editing.get() { "Close" } else { "Edit" }}
            </button>
            {move || editing.get().then(|| view! {
                <form class="creator-item-edit" on:submit=save.clone()>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title.set(input.value());
                        }
                    />
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_description.set(area.value());
                        }
                    />
                    <button type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                </form>
            })}
        </li>
    }
}

#[component]
pub fn CreatorDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let items = use_query::<Vec<PortfolioItem>, _, _>(ctx.cache, keys::creator_items(), || async {
        to_slot_value(api::creator_items().await)
    });

    Effect::new(move |_| {
        if let Some(err) = items.error.get() {
            ctx.toast_error(err);
        }
    });

    let (display_name, set_display_name) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (profile_pending, set_profile_pending) = signal(false);

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if profile_pending.get() {
            return;
        }
        let profile = CreatorProfile {
            display_name: display_name.get(),
            bio: bio.get(),
            profile_image: String::new(),
        };
        if profile.display_name.trim().is_empty() {
            ctx.toast_error("Display name is required".to_string());
            return;
        }
        set_profile_pending.set(true);
        spawn_local(async move {
            match api::save_creator_profile(&profile).await {
                Ok(()) => {
                    ctx.cache.invalidate(&keys::authors());
                    ctx.toast_info("Profile saved".to_string());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_profile_pending.set(false);
        });
    };

    view! {
        <section class="creator-dashboard">
            <h1>"My items"</h1>
            {move || (items.loading.get()).then(|| view! { <p>"Loading..."</p> })}
            <ul class="creator-item-list">
                <For
                    each=move || items.data.get().unwrap_or_default()
                    key=|item| (item.id, item.title.clone(), item.updated_at)
                    children=move |item| view! { <CreatorItemRow item=item/> }
                />
            </ul>

            <h2>"Profile"</h2>
            <form class="creator-profile-form" on:submit=save_profile>
                <input
                    type="text"
                    placeholder="Display name"
                    prop:value=move || display_name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_display_name.set(input.value());
                    }
                />
                <textarea
                    placeholder="Bio"
                    prop:value=move || bio.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_bio.set(area.value());
                    }
                />
                <button type="submit" disabled=move || profile_pending.get()>
                    {move || if profile_pending.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </section>
    }
}
