//! Toast Host Component
//!
//! Renders the toast queue from the UI store; clicking a toast dismisses it.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, ToastKind, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Info => "toast info",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
