//! Login Form Component

use leptos::prelude::*;
use leptos_router::components::Redirect;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::session::SessionPhase;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        session.login(username.get(), password.get());
    };

    view! {
        // Already signed in (or just succeeded): nothing to show here
        {move || matches!(session.phase(), SessionPhase::Authenticated(_)).then(|| view! {
            <Redirect path="/"/>
        })}
        <form class="login-form" on:submit=submit>
            <h1>"Sign in"</h1>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_username.set(input.value());
                }
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_password.set(input.value());
                }
            />
            <button type="submit" disabled=move || session.login_pending.get()>
                {move || if session.login_pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
            {move || session.login_error.get().map(|err| view! {
                <p class="form-error">{err}</p>
            })}
        </form>
    }
}
