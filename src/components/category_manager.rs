//! Category Manager Component
//!
//! Admin screen listing categories with an add form. Name uniqueness is
//! checked against the loaded list before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateCategoryArgs};
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::{validate_category, Category};

#[component]
pub fn CategoryManager() -> impl IntoView {
    let ctx = use_app_context();

    let categories = use_query::<Vec<Category>, _, _>(ctx.cache, keys::categories(), || async {
        to_slot_value(api::list_categories().await)
    });

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let new_name = name.get();
        let new_description = description.get();
        let existing = categories.data.get().unwrap_or_default();
        if let Err(msg) = validate_category(&new_name, &existing) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            let args = CreateCategoryArgs { name: new_name.trim(), description: new_description.trim() };
            match api::create_category(&args).await {
                Ok(created) => {
                    ctx.cache.invalidate(&keys::categories());
                    ctx.cache.invalidate(&keys::category_options());
                    ctx.toast_info(format!("Added category \"{}\"", created.name));
                    set_name.set(String::new());
                    set_description.set(String::new());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <section class="category-manager">
            <h1>"Categories"</h1>
            <form class="category-add-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="New category..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_description.set(input.value());
                    }
                />
                <button type="submit" disabled=move || pending.get()>"Add"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || (categories.loading.get()).then(|| view! { <p>"Loading..."</p> })}
            <ul class="category-list">
                <For
                    each=move || categories.data.get().unwrap_or_default()
                    key=|category| (category.id, category.name.clone(), category.display_order)
                    children=move |category| {
                        view! {
                            <li class="category-row">
                                <span class="category-name">{category.name.clone()}</span>
                                {(!category.description.is_empty()).then(|| view! {
                                    <span class="category-description">{category.description.clone()}</span>
                                })}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
