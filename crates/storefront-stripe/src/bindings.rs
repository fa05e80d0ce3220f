//! Low-level wasm-bindgen bindings to Stripe.js v3.
//!
//! Raw handles only; the safe wrapper lives in `client.rs`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Raw Stripe.js client handle.
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    #[derive(Debug, Clone)]
    pub type JsStripe;

    /// Construct a `JsStripe` from a publishable key.
    ///
    /// ```js
    ///   const stripe = Stripe("pk_test_...");
    /// ```
    #[wasm_bindgen(catch, js_name = Stripe, js_namespace = window)]
    pub fn new_stripe(publishable_key: &str) -> Result<JsStripe, JsValue>;

    /// `stripe.redirectToCheckout({ sessionId })` → JS `Promise`.
    ///
    /// The promise resolves with `{ error }` when the redirect fails; on
    /// success the browser has already navigated away.
    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    pub fn redirect_to_checkout(this: &JsStripe, options: JsValue) -> Result<Promise, JsValue>;
}
