//! Home Page

use leptos::prelude::*;

use storefront_core::all_products;

use crate::components::ProductCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Hearth & Bean"</h1>
                <p class="tagline">"Small-batch coffee gear, shipped from our roastery"</p>
            </header>

            <section class="catalog">
                {all_products()
                    .iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </section>
        </div>
    }
}
