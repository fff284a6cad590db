#![allow(warnings)]
//! Vitrine Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod context;
mod guard;
mod models;
mod reorder;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
