//! Application Context
//!
//! Shared handles provided via Leptos Context API. The cache, session store
//! and UI store are constructed once in `App` and passed by handle; nothing
//! in the tree reaches for module globals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryCache;
use crate::session::SessionStore;
use crate::store::{store_dismiss_toast, store_push_toast, ToastKind, UiStore};

/// How long a toast stays up
const TOAST_DISMISS_MS: u32 = 4_000;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub cache: QueryCache,
    pub session: SessionStore,
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(cache: QueryCache, session: SessionStore, ui: UiStore) -> Self {
        Self { cache, session, ui }
    }

    /// Surface an API failure as a toast
    pub fn toast_error(&self, text: String) {
        self.toast(ToastKind::Error, text);
    }

    pub fn toast_info(&self, text: String) {
        self.toast(ToastKind::Info, text);
    }

    fn toast(&self, kind: ToastKind, text: String) {
        let id = store_push_toast(&self.ui, kind, text);
        let ui = self.ui;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            store_dismiss_toast(&ui, id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
