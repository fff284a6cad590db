//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Kind of toast notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

/// One toast notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Active toast notifications, newest last
    pub toasts: Vec<Toast>,
    /// Monotonic toast id source
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast and return its id for dismissal
pub fn store_push_toast(store: &UiStore, kind: ToastKind, text: String) -> u32 {
    let id = {
        let next_id = store.next_toast_id();
        let mut next = next_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, text });
    id
}

/// Remove a toast by id
pub fn store_dismiss_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
