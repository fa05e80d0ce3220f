//! API Client
//!
//! One endpoint: the checkout-session creator. It lives outside this
//! repository; the contract is `{items, purchaseType}` in, `{sessionId}`
//! or `{error}` out, keyed to the HTTP status.

use url::Url;

use storefront_core::{
    error_body_message, CheckoutError, CheckoutRequest, CheckoutSessionResponse,
};

const CHECKOUT_SESSION_PATH: &str = "/api/checkout_session";

/// Absolute endpoint URL. reqwest refuses relative URLs on every target,
/// so the caller's site origin is the base.
fn checkout_session_url(origin: &Url) -> Result<Url, CheckoutError> {
    origin
        .join(CHECKOUT_SESSION_PATH)
        .map_err(|err| CheckoutError::Network(err.to_string()))
}

/// Ask the backend to create a checkout session for the given request.
pub async fn create_checkout_session(
    origin: &Url,
    request: &CheckoutRequest,
) -> Result<String, CheckoutError> {
    let client = reqwest::Client::new();

    let response = client
        .post(checkout_session_url(origin)?)
        .json(request)
        .send()
        .await
        .map_err(|err| CheckoutError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_body_message(&body)
            .unwrap_or_else(|| "Unable to start checkout. Please try again.".to_string());
        log::error!("checkout session endpoint returned {status}: {message}");
        return Err(CheckoutError::Session(message));
    }

    let body = response
        .text()
        .await
        .map_err(|err| CheckoutError::Network(err.to_string()))?;
    session_id_from_body(&body)
}

/// Pull the session id out of a 2xx response body.
///
/// A body that does not decode is treated the same as a body without a
/// session id: the shopper gets the contextualized message, the decode
/// detail only goes to the console.
fn session_id_from_body(body: &str) -> Result<String, CheckoutError> {
    let session: CheckoutSessionResponse = serde_json::from_str(body).map_err(|err| {
        log::warn!("undecodable checkout session response: {err}");
        CheckoutError::MissingSessionId
    })?;
    session
        .into_session_id()
        .ok_or(CheckoutError::MissingSessionId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_is_absolute() {
        let origin = Url::parse("https://shop.example.com").unwrap();
        let url = checkout_session_url(&origin).unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/checkout_session");

        // The bare path alone is not a fetchable URL; the origin is required.
        assert!(Url::parse(CHECKOUT_SESSION_PATH).is_err());
    }

    #[test]
    fn test_session_id_from_body() {
        assert_eq!(
            session_id_from_body(r#"{"sessionId": "cs_123"}"#).unwrap(),
            "cs_123"
        );
    }

    #[test]
    fn test_missing_session_id_is_contextualized() {
        let err = session_id_from_body("{}").unwrap_err();
        assert_eq!(err, CheckoutError::MissingSessionId);
    }

    #[test]
    fn test_undecodable_body_never_reaches_the_shopper_verbatim() {
        let err = session_id_from_body("<html>ok</html>").unwrap_err();
        assert_eq!(err, CheckoutError::MissingSessionId);
        assert!(!err.user_message().contains("expected value"));
    }
}
