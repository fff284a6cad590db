//! Item Card Component
//!
//! One portfolio item in the gallery grid: image, title, author/category
//! links, tags, marketplace links, and a delete control for catalog managers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::cache::keys;
use crate::context::use_app_context;
use crate::models::{Capability, PortfolioItem};

#[component]
pub fn ItemCard(item: PortfolioItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let category = item.category.clone();
    let author = item.author.clone();
    let (deleting, set_deleting) = signal(false);

    let delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let category = category.clone();
        let author = author.clone();
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => {
                    ctx.cache.invalidate(&keys::items_all());
                    ctx.cache.invalidate(&keys::items_by_category(&category));
                    ctx.cache.invalidate(&keys::items_by_author(&author));
                    ctx.cache.invalidate(&keys::authors());
                    ctx.toast_info("Item deleted".to_string());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="item-card">
            <img class="item-image" src=item.image_url.clone() alt=item.title.clone()/>
            <div class="item-body">
                <h3 class="item-title">{item.title.clone()}</h3>
                <p class="item-byline">
                    <A href=format!("/author/{}", item.author)>{item.author.clone()}</A>
                    " in "
                    <A href=format!("/category/{}", item.category)>{item.category.clone()}</A>
                </p>
                {(!item.description.is_empty()).then(|| view! {
                    <p class="item-description">{item.description.clone()}</p>
                })}
                <div class="item-tags">
                    {item.tags.iter().map(|tag| view! {
                        <span class="item-tag">{tag.clone()}</span>
                    }).collect_view()}
                </div>
                <div class="item-links">
                    {item.marketplace_links.iter().map(|link| view! {
                        <a href=link.url.clone() target="_blank" rel="noreferrer">{link.label.clone()}</a>
                    }).collect_view()}
                </div>
                {move || ctx.session.can(Capability::ManageCatalog).then(|| view! {
                    <button class="item-delete" disabled=move || deleting.get() on:click=delete.clone()>
                        "Delete"
                    </button>
                })}
            </div>
        </div>
    }
}
