//! Stripe Integration Errors

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, StripeError>;

/// Errors from the Stripe.js integration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripeError {
    /// Stripe.js script is not present on the page
    #[error("Stripe.js is not loaded")]
    NotLoaded,

    /// The `Stripe(publishableKey)` constructor threw
    #[error("Stripe client init failed: {0}")]
    Init(String),

    /// `redirectToCheckout` failed or reported an error
    #[error("{0}")]
    Redirect(String),
}
