//! Checkout Orchestration
//!
//! The chain behind the buy button: capability check, payload build,
//! session creation, client init, redirect. Every failure is terminal for
//! the attempt; there are no retries, the shopper clicks again.

use storefront_core::{CheckoutError, CheckoutRequest, Product, PurchaseType};
use storefront_stripe::{StripeClient, StripeError};

use crate::{api, config};

/// Run the checkout chain for one product.
///
/// The auth precondition is handled by the caller (it is a navigation,
/// not an error). On success the browser is already navigating to
/// Stripe's hosted page, so the caller must not reset its loading state.
pub async fn initiate_checkout(
    product: &Product,
    purchase: PurchaseType,
) -> Result<(), CheckoutError> {
    if !config::payments_configured() {
        return Err(CheckoutError::NotConfigured);
    }

    let origin = config::site_origin();
    let request = CheckoutRequest::single(product, purchase, &origin);
    let session_id = api::create_checkout_session(&origin, &request).await?;
    log::debug!("created checkout session {session_id} for {}", product.id);

    let key = config::stripe_publishable_key().ok_or(CheckoutError::NotConfigured)?;
    let client = StripeClient::new(key).map_err(|err| {
        log::error!("stripe client init failed: {err}");
        CheckoutError::ClientInit
    })?;

    client
        .redirect_to_checkout(&session_id)
        .await
        .map_err(|err| match err {
            StripeError::Redirect(message) => CheckoutError::Redirect(message),
            other => CheckoutError::Redirect(other.to_string()),
        })
}
