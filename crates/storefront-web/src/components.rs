//! UI Components

use leptos::prelude::*;

use storefront_core::{format_usd, Product};

/// Catalog card linking to a product's detail page
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let image = product.images.first().cloned().unwrap_or_default();

    view! {
        <a class="product-card" href=format!("/products/{}", product.id)>
            <img src=image alt=product.name.clone() />
            <span class="category">{product.category.clone()}</span>
            <h3>{product.name.clone()}</h3>
            <span class="price">{format_usd(product.price)}</span>
        </a>
    }
}

/// Stock indicator shown on the detail page
#[component]
pub fn StockBadge(product: &'static Product) -> impl IntoView {
    let (class, label) = if product.in_stock() {
        ("badge in-stock", format!("{} in stock", product.stock))
    } else {
        ("badge sold-out", "Out of stock".to_string())
    };

    view! { <span class=class>{label}</span> }
}
