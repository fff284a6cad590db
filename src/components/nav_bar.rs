//! Navigation Bar Component
//!
//! Session-aware top navigation: public links always, management links by
//! capability, login/logout by session phase.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::models::Capability;
use crate::session::SessionPhase;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;

    let account = move || match session.phase() {
        SessionPhase::Authenticated(user) => view! {
            <span class="nav-account">
                <span class="nav-username">{user.username.clone()}</span>
                <button class="nav-logout" on:click=move |_| session.logout()>"Sign out"</button>
            </span>
        }
        .into_any(),
        SessionPhase::Anonymous => view! {
            <span class="nav-account">
                <A href="/login">"Sign in"</A>
            </span>
        }
        .into_any(),
        // Unknown/Loading: render nothing rather than flashing the wrong state
        _ => ().into_any(),
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-brand">"Gallery"</A>
            <A href="/authors">"Authors"</A>
            <A href="/contact">"Contact"</A>
            {move || session.can(Capability::ManageCatalog).then(|| view! {
                <A href="/admin">"Admin"</A>
            })}
            {move || (session.can(Capability::ManageOwnItems) && !session.is_admin()).then(|| view! {
                <A href="/creator">"My items"</A>
            })}
            {account}
        </nav>
    }
}
