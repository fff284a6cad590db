//! Item Form Component
//!
//! Admin form for adding a catalog item: category select fed from the
//! lightweight options endpoint, comma-separated tags, up to two marketplace
//! links. Validation failures stay on the form and never reach the network.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::{validate_item, CategoryOption, ItemDraft, MarketplaceLink};

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let options = use_query::<Vec<CategoryOption>, _, _>(ctx.cache, keys::category_options(), || async {
        to_slot_value(api::category_options().await)
    });

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (tags_raw, set_tags_raw) = signal(String::new());
    let (link1_label, set_link1_label) = signal(String::new());
    let (link1_url, set_link1_url) = signal(String::new());
    let (link2_label, set_link2_label) = signal(String::new());
    let (link2_url, set_link2_url) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let clear = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_image_url.set(String::new());
        set_tags_raw.set(String::new());
        set_link1_label.set(String::new());
        set_link1_url.set(String::new());
        set_link2_label.set(String::new());
        set_link2_url.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let mut marketplace_links = Vec::new();
        for (label, url) in [(link1_label.get(), link1_url.get()), (link2_label.get(), link2_url.get())] {
            if !url.trim().is_empty() {
                let label = if label.trim().is_empty() { "Listing".to_string() } else { label };
                marketplace_links.push(MarketplaceLink { label, url });
            }
        }
        let draft = ItemDraft {
            title: title.get(),
            description: description.get(),
            image_url: image_url.get(),
            category: category.get(),
            author: author.get(),
            tags: split_tags(&tags_raw.get()),
            marketplace_links,
        };
        if let Err(msg) = validate_item(&draft) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            match api::create_item(&draft).await {
                Ok(created) => {
                    ctx.cache.invalidate(&keys::items_all());
                    ctx.cache.invalidate(&keys::items_by_category(&created.category));
                    ctx.cache.invalidate(&keys::items_by_author(&created.author));
                    ctx.cache.invalidate(&keys::authors());
                    ctx.toast_info(format!("Added \"{}\"", created.title));
                    clear();
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="item-form" on:submit=submit>
            <h1>"Add item"</h1>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(area.value());
                }
            />
            <input
                type="text"
                placeholder="Image URL"
                prop:value=move || image_url.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_image_url.set(input.value());
                }
            />
            <select
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_category.set(select.value());
                }
            >
                <option value="">"Choose a category..."</option>
                {move || options.data.get().unwrap_or_default().into_iter().map(|option| {
                    let selected = category.get() == option.name;
                    view! {
                        <option value=option.name.clone() selected=selected>{option.name.clone()}</option>
                    }
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Author"
                prop:value=move || author.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_author.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Tags (comma separated)"
                prop:value=move || tags_raw.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_tags_raw.set(input.value());
                }
            />
            <fieldset class="link-row">
                <legend>"Marketplace links (up to 2)"</legend>
                <input
                    type="text"
                    placeholder="Label"
                    prop:value=move || link1_label.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_link1_label.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="URL"
                    prop:value=move || link1_url.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_link1_url.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Label"
                    prop:value=move || link2_label.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_link2_label.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="URL"
                    prop:value=move || link2_url.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_link2_url.set(input.value());
                    }
                />
            </fieldset>
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { "Add item" }}
            </button>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::split_tags;

    #[test]
    fn test_split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("ink, gouache ,  , print"), vec!["ink", "gouache", "print"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
    }
}
