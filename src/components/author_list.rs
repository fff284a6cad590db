//! Author List Component
//!
//! Authors are aggregated by the backend; each entry links to that author's
//! gallery view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::Author;

#[component]
pub fn AuthorList() -> impl IntoView {
    let ctx = use_app_context();

    let authors = use_query::<Vec<Author>, _, _>(ctx.cache, keys::authors(), || async {
        to_slot_value(api::list_authors().await)
    });

    Effect::new(move |_| {
        if let Some(err) = authors.error.get() {
            ctx.toast_error(err);
        }
    });

    view! {
        <section class="author-list">
            <h1>"Authors"</h1>
            {move || (authors.loading.get()).then(|| view! { <p>"Loading..."</p> })}
            <div class="author-grid">
                <For
                    each=move || authors.data.get().unwrap_or_default()
                    key=|author| (author.name.clone(), author.item_count)
                    children=move |author| {
                        view! {
                            <A href=format!("/author/{}", author.name) attr:class="author-card">
                                {author.profile_image.clone().map(|src| view! {
                                    <img class="author-image" src=src alt=author.name.clone()/>
                                })}
                                <span class="author-name">{author.name.clone()}</span>
                                <span class="author-count">{format!("{} items", author.item_count)}</span>
                            </A>
                        }
                    }
                />
            </div>
        </section>
    }
}
