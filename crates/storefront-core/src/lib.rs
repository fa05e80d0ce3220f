//! # storefront-core
//!
//! Domain types for the storefront frontend: the product catalog, money
//! display, and the checkout-session wire format exchanged with the
//! payment backend.
//!
//! Everything in this crate is pure and target-independent; the wasm
//! frontend and its Stripe integration live in sibling crates.

mod catalog;
mod checkout;
mod error;
mod money;
mod product;

pub use catalog::{all_products, find_product};
pub use checkout::{
    error_body_message, CheckoutItem, CheckoutRequest, CheckoutSessionResponse,
};
pub use error::{CheckoutError, Result};
pub use money::format_usd;
pub use product::{Product, PurchaseType};
