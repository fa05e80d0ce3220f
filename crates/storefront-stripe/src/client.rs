//! Safe wrapper over the raw Stripe.js bindings.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::bindings::{new_stripe, JsStripe};
use crate::error::{Result, StripeError};

/// Whether the Stripe.js script has been loaded into the page.
///
/// This is the client half of the payment capability probe; it never
/// errors, it only answers no.
pub fn is_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(&window, &JsValue::from_str("Stripe")).unwrap_or(false)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RedirectToCheckoutOptions<'a> {
    session_id: &'a str,
}

/// A constructed Stripe.js client, bound to one publishable key.
pub struct StripeClient {
    inner: JsStripe,
}

impl StripeClient {
    /// Instantiate `Stripe(publishableKey)`.
    ///
    /// Fails when the script is not loaded or the constructor throws.
    pub fn new(publishable_key: &str) -> Result<Self> {
        if !is_loaded() {
            return Err(StripeError::NotLoaded);
        }
        let inner =
            new_stripe(publishable_key).map_err(|err| StripeError::Init(js_message(&err)))?;
        Ok(Self { inner })
    }

    /// Redirect the browser to Stripe's hosted checkout page.
    ///
    /// On success this never really "returns" in a meaningful way: the
    /// browser is navigating away. An `Ok(())` simply means Stripe reported
    /// no error before the navigation.
    pub async fn redirect_to_checkout(&self, session_id: &str) -> Result<()> {
        let options = serde_wasm_bindgen::to_value(&RedirectToCheckoutOptions { session_id })
            .map_err(|err| StripeError::Redirect(err.to_string()))?;

        let promise = self
            .inner
            .redirect_to_checkout(options)
            .map_err(|err| StripeError::Redirect(js_message(&err)))?;
        let outcome = JsFuture::from(promise)
            .await
            .map_err(|err| StripeError::Redirect(js_message(&err)))?;

        let outcome: serde_json::Value =
            serde_wasm_bindgen::from_value(outcome).unwrap_or(serde_json::Value::Null);
        if let Some(message) = redirect_error_message(&outcome) {
            log::error!("stripe redirectToCheckout reported: {message}");
            return Err(StripeError::Redirect(message));
        }
        Ok(())
    }
}

/// Extract the error message from a resolved `redirectToCheckout` result.
///
/// Stripe resolves with `{ error: { message } }`; a bare string under
/// `error` is tolerated too.
fn redirect_error_message(outcome: &serde_json::Value) -> Option<String> {
    let error = outcome.get("error")?;
    if let Some(message) = error.as_str() {
        return Some(message.to_string());
    }
    error
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .or_else(|| Some("checkout redirect failed".to_string()))
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redirect_error_message_object() {
        let outcome = json!({"error": {"message": "Invalid session id"}});
        assert_eq!(
            redirect_error_message(&outcome).as_deref(),
            Some("Invalid session id")
        );
    }

    #[test]
    fn test_redirect_error_message_string() {
        let outcome = json!({"error": "expired"});
        assert_eq!(redirect_error_message(&outcome).as_deref(), Some("expired"));
    }

    #[test]
    fn test_redirect_error_message_opaque_error() {
        let outcome = json!({"error": {"code": 42}});
        assert_eq!(
            redirect_error_message(&outcome).as_deref(),
            Some("checkout redirect failed")
        );
    }

    #[test]
    fn test_no_error_means_none() {
        assert!(redirect_error_message(&json!({})).is_none());
        assert!(redirect_error_message(&serde_json::Value::Null).is_none());
    }
}
