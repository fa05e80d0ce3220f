//! # storefront-stripe
//!
//! Minimal integration with Stripe.js v3 for the hosted checkout flow.
//!
//! The page includes `https://js.stripe.com/v3/` via a script tag; this
//! crate binds to the global `Stripe` constructor and exposes exactly what
//! the storefront needs:
//!
//! - [`is_loaded`] — configuration probe: is the provider script present?
//! - [`StripeClient`] — client factory around `Stripe(publishableKey)`
//! - [`StripeClient::redirect_to_checkout`] — hand a server-created session
//!   id to Stripe's hosted payment page
//!
//! Card collection, SCA, and everything else stays on Stripe's side.

mod bindings;
mod client;
mod error;

pub use bindings::JsStripe;
pub use client::{is_loaded, StripeClient};
pub use error::{Result, StripeError};
