//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::auth::{provide_auth, use_auth};
use crate::pages::{HomePage, LoginPage, ProductPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_auth();

    view! {
        <Router>
            <SiteHeader />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products/:id") view=ProductPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    view! {
        <header class="site-header">
            <a class="brand" href="/">"Hearth & Bean"</a>
            <nav>
                <Show
                    when=move || user.get().is_some()
                    fallback=|| view! { <a href="/login">"Sign in"</a> }
                >
                    <span class="user-email">
                        {move || user.get().map(|u| u.email).unwrap_or_default()}
                    </span>
                    <button class="link" on:click=move |_| auth.sign_out()>"Sign out"</button>
                </Show>
            </nav>
        </header>
    }
}
