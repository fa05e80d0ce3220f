//! Login Page
//!
//! Minimal sign-in: the surrounding platform owns real authentication,
//! the storefront only needs an identified shopper. The `redirect` query
//! parameter carries the page to return to after signing in.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::{use_auth, User};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let auth = use_auth();
    let query = use_query_map();
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if address.is_empty() {
            return;
        }
        auth.sign_in(User { email: address });
        let target = query
            .get_untracked()
            .get("redirect")
            .unwrap_or_else(|| "/".to_string());
        navigate(&target, Default::default());
    };

    view! {
        <div class="login">
            <h1>"Sign in"</h1>
            <p class="subtitle">"Sign in to complete your purchase"</p>

            <form on:submit=submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Continue"</button>
            </form>
        </div>
    }
}
