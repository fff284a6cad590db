//! Vitrine Frontend App
//!
//! Root component: constructs the cache/session/UI stores, provides them via
//! context, and declares the route tree. Management routes sit behind the
//! capability guard.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use reactive_stores::Store;

use crate::cache::QueryCache;
use crate::components::{
    AuthorList, CategoryManager, ContactForm, CreatorDashboard, Gallery, GalleryScope, ItemForm,
    LoginForm, NavBar, NftImport, SettingsForm, ShareViewPage, ToastHost,
};
use crate::context::AppContext;
use crate::guard::RequireRole;
use crate::models::Capability;
use crate::session::SessionStore;
use crate::store::{UiState, UiStore};

#[component]
pub fn App() -> impl IntoView {
    // Stores are constructed once here and handed down by context; nothing
    // in the tree reads ambient module state
    let cache = QueryCache::new();
    let session = SessionStore::new(cache);
    let ui: UiStore = Store::new(UiState::default());

    provide_context(cache);
    provide_context(session);
    provide_context(ui);
    provide_context(AppContext::new(cache, session, ui));

    view! {
        <Router>
            <NavBar/>
            <ToastHost/>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/category/:slug") view=CategoryPage/>
                    <Route path=path!("/author/:name") view=AuthorPage/>
                    <Route path=path!("/authors") view=AuthorList/>
                    <Route path=path!("/share/:code") view=SharePage/>
                    <Route path=path!("/login") view=LoginForm/>
                    <Route path=path!("/contact") view=ContactForm/>
                    <Route path=path!("/admin") view=AdminHomePage/>
                    <Route path=path!("/admin/items/new") view=NewItemPage/>
                    <Route path=path!("/admin/categories") view=CategoriesAdminPage/>
                    <Route path=path!("/admin/settings") view=SettingsAdminPage/>
                    <Route path=path!("/admin/nfts") view=NftImportPage/>
                    <Route path=path!("/creator") view=CreatorPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! { <Gallery scope=GalleryScope::All/> }
}

#[component]
fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let slug = params.get().get("slug").unwrap_or_default();
        view! { <Gallery scope=GalleryScope::Category(slug)/> }
    }
}

#[component]
fn AuthorPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let name = params.get().get("name").unwrap_or_default();
        view! { <Gallery scope=GalleryScope::Author(name)/> }
    }
}

#[component]
fn SharePage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let code = params.get().get("code").unwrap_or_default();
        view! { <ShareViewPage code=code/> }
    }
}

#[component]
fn AdminHomePage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ManageCatalog>
            <section class="admin-home">
                <h1>"Admin"</h1>
                <ul class="admin-menu">
                    <li><A href="/admin/items/new">"Add item"</A></li>
                    <li><A href="/admin/categories">"Categories"</A></li>
                    <li><A href="/admin/settings">"Site settings"</A></li>
                    <li><A href="/admin/nfts">"NFT import"</A></li>
                </ul>
            </section>
        </RequireRole>
    }
}

#[component]
fn NewItemPage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ManageCatalog>
            <ItemForm/>
        </RequireRole>
    }
}

#[component]
fn CategoriesAdminPage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ManageCatalog>
            <CategoryManager/>
        </RequireRole>
    }
}

#[component]
fn SettingsAdminPage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ManageSettings>
            <SettingsForm/>
        </RequireRole>
    }
}

#[component]
fn NftImportPage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ImportNfts>
            <NftImport/>
        </RequireRole>
    }
}

#[component]
fn CreatorPage() -> impl IntoView {
    view! {
        <RequireRole capability=Capability::ManageOwnItems>
            <CreatorDashboard/>
        </RequireRole>
    }
}
