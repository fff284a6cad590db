//! Gallery Component
//!
//! Item grid for a scope (everything, one category, or one author), with
//! arranging mode for catalog managers. While arranging, drag-and-drop edits
//! the controller's local order only; one batch write commits it.

use leptos::prelude::*;

use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_mousedown, make_on_mouseleave,
    make_on_slot_mouseenter, SortSignals,
};

use crate::api;
use crate::cache::{keys, to_slot_value, use_query, QueryKey};
use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::models::{Capability, PortfolioItem};
use crate::reorder::ReorderController;

/// What the gallery is showing
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryScope {
    All,
    Category(String),
    Author(String),
}

impl GalleryScope {
    fn key(&self) -> QueryKey {
        match self {
            GalleryScope::All => keys::items_all(),
            GalleryScope::Category(slug) => keys::items_by_category(slug),
            GalleryScope::Author(name) => keys::items_by_author(name),
        }
    }

    fn heading(&self) -> String {
        match self {
            GalleryScope::All => "All work".to_string(),
            GalleryScope::Category(slug) => slug.clone(),
            GalleryScope::Author(name) => name.clone(),
        }
    }
}

/// Insertion slot between cards, visible only during a drag
#[component]
fn SortSlot(sort: SortSignals, slot_index: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(sort, slot_index);
    let on_mouseleave = make_on_mouseleave(sort);

    view! {
        <div
            class=move || {
                let mut c = "sort-slot".to_string();
                if sort.hover_slot_read.get() == Some(slot_index) { c.push_str(" active"); }
                if sort.dragging_id_read.get().is_none() { c.push_str(" hidden"); }
                c
            }
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

#[component]
pub fn Gallery(scope: GalleryScope) -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;

    let key = scope.key();
    let loader = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            async move {
                match scope {
                    GalleryScope::All => to_slot_value(api::list_items().await),
                    GalleryScope::Category(slug) => {
                        to_slot_value(api::list_items_by_category(&slug).await)
                    }
                    GalleryScope::Author(name) => {
                        to_slot_value(api::list_items_by_author(&name).await)
                    }
                }
            }
        }
    };
    let query = use_query::<Vec<PortfolioItem>, _, _>(ctx.cache, key.clone(), loader);

    // A committed order changes this list and the unscoped one
    let mut source_keys = vec![key.clone()];
    if key != keys::items_all() {
        source_keys.push(keys::items_all());
    }
    let ctrl = ReorderController::new(ctx.cache, source_keys);

    // Server truth is authoritative only while not arranging
    Effect::new(move |_| {
        if let Some(items) = query.data.get() {
            ctrl.sync_from_server(items);
        }
    });

    Effect::new(move |_| {
        if let Some(err) = query.error.get() {
            ctx.toast_error(err);
        }
    });

    // Drops dispatch a local move intent; nothing hits the network here
    let sort = create_sort_signals();
    bind_global_mouseup(sort, move |dragged_id, slot| {
        ctrl.move_to_slot(dragged_id, slot);
    });

    let heading = scope.heading();

    let controls = move || {
        if !session.can(Capability::ManageCatalog) {
            return ().into_any();
        }
        if ctrl.arranging.get() {
            view! {
                <div class="arrange-controls">
                    <button disabled=move || ctrl.saving.get() on:click=move |_| ctrl.save()>
                        {move || if ctrl.saving.get() { "Saving..." } else { "Save order" }}
                    </button>
                    <button disabled=move || ctrl.saving.get() on:click=move |_| ctrl.cancel()>
                        "Cancel"
                    </button>
                    {move || ctrl.save_error.get().map(|err| view! {
                        <span class="arrange-error">{err}</span>
                    })}
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="arrange-controls">
                    <button on:click=move |_| ctrl.start_arranging()>"Arrange"</button>
                </div>
            }
            .into_any()
        }
    };

    let grid = move || {
        let items = ctrl.items.get();
        let arranging = ctrl.arranging.get();
        let count = items.len();
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let id = item.id;
                let on_mousedown = make_on_mousedown(sort, id);
                let is_dragging = move || sort.dragging_id_read.get() == Some(id);
                let wrapper_class = move || {
                    let mut c = "item-cell".to_string();
                    if arranging { c.push_str(" arranging"); }
                    if is_dragging() { c.push_str(" dragging"); }
                    c
                };
                view! {
                    {arranging.then(|| view! { <SortSlot sort=sort slot_index=index/> })}
                    <div
                        class=wrapper_class
                        on:mousedown=move |ev| {
                            if arranging {
                                on_mousedown(ev);
                            }
                        }
                    >
                        <ItemCard item=item/>
                    </div>
                    {(arranging && index + 1 == count).then(|| view! {
                        <SortSlot sort=sort slot_index=count/>
                    })}
                }
            })
            .collect_view()
    };

    view! {
        <section class="gallery">
            <header class="gallery-header">
                <h1>{heading}</h1>
                {controls}
            </header>
            {move || (query.loading.get()).then(|| view! { <p class="gallery-loading">"Loading..."</p> })}
            <div class="gallery-grid">{grid}</div>
            {move || {
                let empty = ctrl.items.with(|items| items.is_empty());
                (empty && !query.loading.get()).then(|| view! {
                    <p class="gallery-empty">"Nothing here yet."</p>
                })
            }}
        </section>
    }
}
