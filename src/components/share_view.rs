//! Share View Component
//!
//! Public, read-only page for one item behind an opaque share code. No
//! session required; a bad code renders a not-found message rather than an
//! error toast.

use leptos::prelude::*;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::ShareView;

#[component]
pub fn ShareViewPage(code: String) -> impl IntoView {
    let ctx = use_app_context();

    let share = {
        let code = code.clone();
        use_query::<ShareView, _, _>(ctx.cache, keys::share(&code), move || {
            let code = code.clone();
            async move { to_slot_value(api::share_view(&code).await) }
        })
    };

    view! {
        <section class="share-view">
            {move || (share.loading.get()).then(|| view! { <p>"Loading..."</p> })}
            {move || share.data.get().map(|view_data| {
                let item = view_data.item;
                view! {
                    <article class="share-item">
                        <h1>{item.title.clone()}</h1>
                        <p class="share-byline">{format!("by {}", item.author)}</p>
                        <img class="share-image" src=item.image_url.clone() alt=item.title.clone()/>
                        {(!item.description.is_empty()).then(|| view! {
                            <p class="share-description">{item.description.clone()}</p>
                        })}
                        <div class="item-links">
                            {item.marketplace_links.iter().map(|link| view! {
                                <a href=link.url.clone() target="_blank" rel="noreferrer">{link.label.clone()}</a>
                            }).collect_view()}
                        </div>
                        {(!view_data.site_title.is_empty()).then(|| view! {
                            <p class="share-footer">{format!("Shared from {}", view_data.site_title)}</p>
                        })}
                    </article>
                }
            })}
            {move || share.error.get().map(|_| view! {
                <p class="share-missing">"This share link is no longer available."</p>
            })}
        </section>
    }
}
