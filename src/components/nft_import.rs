//! NFT Import Component
//!
//! Lists the connected Tezos wallet's tokens (via the backend proxy) and
//! imports a selected batch into the catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cache::{keys, to_slot_value, use_query};
use crate::context::use_app_context;
use crate::models::TezosNft;

#[component]
pub fn NftImport() -> impl IntoView {
    let ctx = use_app_context();

    let nfts = use_query::<Vec<TezosNft>, _, _>(ctx.cache, keys::tezos_nfts(), || async {
        to_slot_value(api::list_tezos_nfts().await)
    });

    Effect::new(move |_| {
        if let Some(err) = nfts.error.get() {
            ctx.toast_error(err);
        }
    });

    let (selected, set_selected) = signal(Vec::<String>::new());
    let (pending, set_pending) = signal(false);

    let toggle = move |token_id: String| {
        set_selected.update(|ids| {
            if let Some(index) = ids.iter().position(|id| *id == token_id) {
                ids.remove(index);
            } else {
                ids.push(token_id);
            }
        });
    };

    let import = move |_| {
        let token_ids = selected.get();
        if token_ids.is_empty() || pending.get() {
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match api::import_tezos_nfts(&token_ids).await {
                Ok(report) => {
                    ctx.cache.invalidate(&keys::tezos_nfts());
                    ctx.cache.invalidate(&keys::items_all());
                    ctx.cache.invalidate(&keys::authors());
                    ctx.toast_info(format!("Imported {} NFTs ({} skipped)", report.imported, report.skipped));
                    set_selected.set(Vec::new());
                }
                Err(err) => ctx.toast_error(err.message()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <section class="nft-import">
            <h1>"Import from Tezos wallet"</h1>
            {move || (nfts.loading.get()).then(|| view! { <p>"Reading wallet..."</p> })}
            <ul class="nft-list">
                <For
                    each=move || nfts.data.get().unwrap_or_default()
                    key=|nft| (nft.token_id.clone(), nft.imported)
                    children=move |nft| {
                        let token_id = nft.token_id.clone();
                        let checked = {
                            let token_id = token_id.clone();
                            move || selected.get().contains(&token_id)
                        };
                        let on_toggle = {
                            let token_id = token_id.clone();
                            move |_| toggle(token_id.clone())
                        };
                        view! {
                            <li class=move || if nft.imported { "nft-row imported" } else { "nft-row" }>
                                <input
                                    type="checkbox"
                                    disabled=nft.imported
                                    prop:checked=checked
                                    on:change=on_toggle
                                />
                                <img class="nft-thumb" src=nft.artifact_uri.clone() alt=nft.name.clone()/>
                                <span class="nft-name">{nft.name.clone()}</span>
                                {(!nft.collection.is_empty()).then(|| view! {
                                    <span class="nft-collection">{nft.collection.clone()}</span>
                                })}
                                {nft.imported.then(|| view! { <span class="nft-imported">"In catalog"</span> })}
                            </li>
                        }
                    }
                />
            </ul>
            <button
                class="nft-import-btn"
                disabled=move || pending.get() || selected.get().is_empty()
                on:click=import
            >
                {move || {
                    if pending.get() {
                        "Importing...".to_string()
                    } else {
                        format!("Import {} selected", selected.get().len())
                    }
                }}
            </button>
        </section>
    }
}
