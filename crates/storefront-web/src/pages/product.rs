//! Product Detail Page

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use storefront_core::{find_product, format_usd, CheckoutError, Product, PurchaseType};

use crate::auth::{login_href, use_auth};
use crate::checkout::initiate_checkout;
use crate::components::StockBadge;
use crate::config;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let id = params.get().get("id").unwrap_or_default();
        match find_product(&id) {
            Some(product) => view! { <ProductDetail product=product /> }.into_any(),
            None => view! { <ProductNotFound /> }.into_any(),
        }
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let (selected_image, set_selected_image) = signal(0usize);
    let (purchase, set_purchase) = signal(PurchaseType::OneTime);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    // Capability probe: once per mount, degrades to "unavailable".
    let payments_available = config::payments_configured();

    let auth = use_auth();
    let navigate = use_navigate();

    let on_buy = move |_| {
        if loading.get() || !product.in_stock() {
            return;
        }
        if auth.current_user().is_none() {
            navigate(
                &login_href(&format!("/products/{}", product.id)),
                Default::default(),
            );
            return;
        }
        if !payments_available {
            set_error.set(CheckoutError::NotConfigured.user_message());
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());

        leptos::task::spawn_local(async move {
            match initiate_checkout(product, purchase.get_untracked()).await {
                // Stripe is navigating away; keep the control disabled.
                Ok(()) => {}
                Err(err) => {
                    log::error!("checkout failed for {}: {err}", product.id);
                    set_error.set(err.user_message());
                    set_loading.set(false);
                }
            }
        });
    };

    let price_label = move || {
        let cents = product.price_for(purchase.get());
        match purchase.get() {
            PurchaseType::OneTime => format_usd(cents),
            PurchaseType::Subscription => format!("{}/month", format_usd(cents)),
        }
    };

    let mode_class = move |mode: PurchaseType| {
        if purchase.get() == mode {
            "mode selected"
        } else {
            "mode"
        }
    };

    view! {
        <div class="product">
            <div class="gallery">
                <img
                    class="main-image"
                    src=move || {
                        product.image_at(selected_image.get()).unwrap_or_default().to_string()
                    }
                    alt=product.name.clone()
                />
                <div class="thumbnails">
                    {product
                        .images
                        .iter()
                        .enumerate()
                        .map(|(i, image)| {
                            let image = image.clone();
                            view! {
                                <button
                                    class=move || {
                                        if selected_image.get() == i {
                                            "thumbnail selected"
                                        } else {
                                            "thumbnail"
                                        }
                                    }
                                    on:click=move |_| set_selected_image.set(i)
                                >
                                    <img src=image alt=format!("{} view {}", product.name, i + 1) />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="details">
                <span class="category">{product.category.clone()}</span>
                <h1>{product.name.clone()}</h1>
                <p class="description">{product.description.clone()}</p>

                <Show when=move || product.is_subscription>
                    <div class="purchase-mode" role="radiogroup">
                        <button
                            class=move || mode_class(PurchaseType::OneTime)
                            on:click=move |_| set_purchase.set(PurchaseType::OneTime)
                        >
                            "One-time purchase"
                        </button>
                        <button
                            class=move || mode_class(PurchaseType::Subscription)
                            on:click=move |_| set_purchase.set(PurchaseType::Subscription)
                        >
                            "Subscribe monthly"
                        </button>
                    </div>
                </Show>

                <div class="price">{price_label}</div>
                <StockBadge product=product />

                <Show when=move || !product.features.is_empty()>
                    <ul class="features">
                        {product
                            .features
                            .iter()
                            .map(|feature| view! { <li>{feature.clone()}</li> })
                            .collect_view()}
                    </ul>
                </Show>

                <button
                    class="btn btn-primary buy"
                    disabled=move || !product.in_stock() || loading.get()
                    on:click=on_buy
                >
                    {move || {
                        if !product.in_stock() {
                            "Out of Stock".to_string()
                        } else if loading.get() {
                            "Redirecting...".to_string()
                        } else {
                            "Buy Now".to_string()
                        }
                    }}
                </button>

                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="product-not-found">
            <h1>"Product not found"</h1>
            <p>"The product you are looking for does not exist or is no longer sold."</p>
            <a class="btn" href="/">"Back to the shop"</a>
        </div>
    }
}
