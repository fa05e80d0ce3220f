//! Checkout Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Everything that can go wrong between the buy click and the redirect.
///
/// Every variant is recoverable: it surfaces as a single inline message on
/// the product page and the shopper can simply try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Payment provider is not configured (no publishable key, or the
    /// provider script never loaded)
    #[error("payments are not configured")]
    NotConfigured,

    /// The checkout-session endpoint answered non-OK
    #[error("checkout session error: {0}")]
    Session(String),

    /// The endpoint answered OK but produced no session identifier
    #[error("checkout response missing session id")]
    MissingSessionId,

    /// The payment client could not be obtained
    #[error("payment client failed to initialize")]
    ClientInit,

    /// The provider reported a redirect failure
    #[error("checkout redirect error: {0}")]
    Redirect(String),

    /// The request never completed (network failure, unreachable endpoint)
    #[error("checkout request failed: {0}")]
    Network(String),
}

impl CheckoutError {
    /// The inline message shown on the product page.
    ///
    /// `Session` carries the backend's own message verbatim (it is already
    /// phrased for the shopper, e.g. "out of stock"); the rest get a
    /// contextualized message here.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::NotConfigured => {
                "Payments are not configured. Please try again later.".into()
            }
            CheckoutError::Session(message) => message.clone(),
            CheckoutError::MissingSessionId => {
                "Checkout failed: no session was created. Please try again.".into()
            }
            CheckoutError::ClientInit => {
                "The payment system failed to load. Please refresh the page and try again.".into()
            }
            CheckoutError::Redirect(message) => {
                format!("Could not redirect to checkout: {message}")
            }
            CheckoutError::Network(_) => {
                "Could not reach the checkout service. Please check your connection and try again."
                    .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_message_is_verbatim() {
        let err = CheckoutError::Session("out of stock".into());
        assert_eq!(err.user_message(), "out of stock");
    }

    #[test]
    fn test_other_messages_are_contextualized() {
        assert!(CheckoutError::NotConfigured
            .user_message()
            .contains("not configured"));
        assert!(CheckoutError::Redirect("card declined".into())
            .user_message()
            .contains("card declined"));
        assert!(!CheckoutError::Network("dns".into())
            .user_message()
            .contains("dns"));
    }
}
