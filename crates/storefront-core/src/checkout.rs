//! Checkout Session Wire Types
//!
//! The shapes exchanged with the checkout-session endpoint. The endpoint
//! itself (and everything behind it) belongs to the payment backend; this
//! crate only builds the request and interprets the response.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::product::{Product, PurchaseType};

/// One line item in a checkout request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub name: String,
    pub description: String,
    /// Absolute image URLs; the payment provider rejects relative paths
    pub images: Vec<String>,
    /// Unit price in cents
    pub price: i64,
    pub quantity: u32,
}

/// Body POSTed to the checkout-session endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub purchase_type: PurchaseType,
}

impl CheckoutRequest {
    /// Build the single-item request for a product page purchase.
    ///
    /// Relative image paths are resolved against `site_origin`; already
    /// absolute URLs pass through untouched. Quantity is fixed at 1.
    pub fn single(product: &Product, purchase: PurchaseType, site_origin: &Url) -> Self {
        let images = product
            .images
            .iter()
            .map(|image| resolve_image_url(image, site_origin))
            .collect();

        Self {
            items: vec![CheckoutItem {
                name: product.name.clone(),
                description: product.description.clone(),
                images,
                price: product.price_for(purchase),
                quantity: 1,
            }],
            purchase_type: purchase,
        }
    }
}

fn resolve_image_url(image: &str, site_origin: &Url) -> String {
    if Url::parse(image).is_ok() {
        return image.to_string();
    }
    match site_origin.join(image) {
        Ok(url) => url.to_string(),
        Err(err) => {
            log::warn!("could not resolve image url {image:?}: {err}");
            image.to_string()
        }
    }
}

/// Successful response from the checkout-session endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

impl CheckoutSessionResponse {
    /// The session identifier, if the endpoint actually produced one.
    pub fn into_session_id(self) -> Option<String> {
        self.session_id.filter(|id| !id.is_empty())
    }
}

/// Best-effort extraction of `{"error": "..."}` from a non-OK response body.
///
/// Malformed JSON yields `None`; the caller substitutes a generic message.
pub fn error_body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string),
        Err(err) => {
            log::warn!("unparseable error body from checkout endpoint: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_product;

    fn origin() -> Url {
        Url::parse("https://shop.example.com").unwrap()
    }

    #[test]
    fn test_single_item_request() {
        let product = find_product("ember-mug").unwrap();
        let request = CheckoutRequest::single(product, PurchaseType::OneTime, &origin());

        assert_eq!(request.items.len(), 1);
        let item = &request.items[0];
        assert_eq!(item.name, product.name);
        assert_eq!(item.price, 12999);
        assert_eq!(item.quantity, 1);
        assert_eq!(request.purchase_type, PurchaseType::OneTime);
    }

    #[test]
    fn test_relative_images_become_absolute() {
        let product = find_product("ember-mug").unwrap();
        let request = CheckoutRequest::single(product, PurchaseType::OneTime, &origin());

        assert_eq!(
            request.items[0].images[0],
            "https://shop.example.com/images/ember-mug-front.jpg"
        );
    }

    #[test]
    fn test_absolute_images_pass_through() {
        let mut product = find_product("ember-mug").unwrap().clone();
        product.images = vec!["https://cdn.example.com/mug.jpg".into()];
        let request = CheckoutRequest::single(&product, PurchaseType::OneTime, &origin());

        assert_eq!(request.items[0].images[0], "https://cdn.example.com/mug.jpg");
    }

    #[test]
    fn test_subscription_request_uses_subscription_price() {
        let product = find_product("roast-club").unwrap();
        let request = CheckoutRequest::single(product, PurchaseType::Subscription, &origin());

        assert_eq!(request.items[0].price, 1900);
        assert_eq!(request.purchase_type, PurchaseType::Subscription);
    }

    #[test]
    fn test_request_wire_shape() {
        let product = find_product("filter-refills").unwrap();
        let request = CheckoutRequest::single(product, PurchaseType::OneTime, &origin());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["purchaseType"], "onetime");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert!(json["items"][0]["images"][0]
            .as_str()
            .unwrap()
            .starts_with("https://"));
    }

    #[test]
    fn test_session_id_present() {
        let response: CheckoutSessionResponse =
            serde_json::from_str(r#"{"sessionId": "cs_123"}"#).unwrap();
        assert_eq!(response.into_session_id().as_deref(), Some("cs_123"));
    }

    #[test]
    fn test_session_id_missing_or_empty() {
        let response: CheckoutSessionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_session_id().is_none());

        let response: CheckoutSessionResponse =
            serde_json::from_str(r#"{"sessionId": ""}"#).unwrap();
        assert!(response.into_session_id().is_none());
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            error_body_message(r#"{"error": "out of stock"}"#).as_deref(),
            Some("out of stock")
        );
        assert!(error_body_message(r#"{"message": "nope"}"#).is_none());
        assert!(error_body_message("<html>502</html>").is_none());
    }
}
