//! Build-time Configuration
//!
//! Both values are baked in at compile time (the CSR bundle has no server
//! to ask): the site origin used to absolutize image URLs, and the Stripe
//! publishable key that gates the whole payment flow.

use url::Url;

const SITE_URL: Option<&str> = option_env!("STOREFRONT_SITE_URL");
const STRIPE_PUBLISHABLE_KEY: Option<&str> = option_env!("STOREFRONT_STRIPE_PUBLISHABLE_KEY");

/// The publishable key, if one was baked into this build.
pub fn stripe_publishable_key() -> Option<&'static str> {
    STRIPE_PUBLISHABLE_KEY.map(str::trim).filter(|key| !key.is_empty())
}

/// Payment capability probe: a key is configured and Stripe.js is loaded.
///
/// Purely local, never contacts the provider, and degrades to `false`
/// with a diagnostic log line instead of erroring.
pub fn payments_configured() -> bool {
    if stripe_publishable_key().is_none() {
        log::warn!("payment probe: no Stripe publishable key in this build");
        return false;
    }
    if !storefront_stripe::is_loaded() {
        log::warn!("payment probe: Stripe.js script is not loaded");
        return false;
    }
    true
}

/// Origin used to resolve relative image paths into absolute URLs.
///
/// Prefers the configured site URL, falls back to the browser's own
/// origin, and as a last resort (no window, e.g. a detached worker)
/// a localhost origin so the checkout payload is still well-formed.
pub fn site_origin() -> Url {
    SITE_URL
        .and_then(|raw| Url::parse(raw).ok())
        .or_else(browser_origin)
        .unwrap_or_else(|| Url::parse("http://localhost:3000").expect("static origin"))
}

fn browser_origin() -> Option<Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Url::parse(&origin).ok()
}
