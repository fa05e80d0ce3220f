//! Product Types

use serde::{Deserialize, Serialize};

/// How the shopper wants to pay for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseType {
    /// Single one-time payment
    #[default]
    #[serde(rename = "onetime")]
    OneTime,
    /// Recurring subscription
    Subscription,
}

impl PurchaseType {
    /// Wire value used in the checkout payload
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseType::OneTime => "onetime",
            PurchaseType::Subscription => "subscription",
        }
    }
}

/// A product in the catalog
///
/// Immutable once constructed; the catalog owns every instance for the
/// lifetime of the app. Prices are in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier (route parameter)
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// One-time price in cents
    pub price: i64,

    /// Recurring price in cents, when the product can be subscribed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_price: Option<i64>,

    /// Units available for purchase
    pub stock: u32,

    /// Category label shown on the page
    pub category: String,

    /// Ordered image references, relative paths or absolute URLs
    pub images: Vec<String>,

    /// Selling points listed on the detail page
    #[serde(default)]
    pub features: Vec<String>,

    /// Whether the subscription purchase mode is offered
    #[serde(default)]
    pub is_subscription: bool,
}

impl Product {
    /// Whether the product can currently be bought
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Image reference at `index`, `None` when out of range.
    ///
    /// The gallery index is always supposed to stay within the image
    /// sequence; this keeps the render site panic-free even if it does
    /// not.
    pub fn image_at(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Price in cents for the given purchase mode.
    ///
    /// Subscription mode falls back to the base price when no dedicated
    /// subscription price is set.
    pub fn price_for(&self, purchase: PurchaseType) -> i64 {
        match purchase {
            PurchaseType::OneTime => self.price,
            PurchaseType::Subscription => self.subscription_price.unwrap_or(self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(subscription_price: Option<i64>) -> Product {
        Product {
            id: "test".into(),
            name: "Test Product".into(),
            description: String::new(),
            price: 1000,
            subscription_price,
            stock: 5,
            category: "test".into(),
            images: vec!["/images/test.jpg".into()],
            features: vec![],
            is_subscription: true,
        }
    }

    #[test]
    fn test_price_for_one_time() {
        assert_eq!(product(Some(900)).price_for(PurchaseType::OneTime), 1000);
    }

    #[test]
    fn test_price_for_subscription() {
        assert_eq!(product(Some(900)).price_for(PurchaseType::Subscription), 900);
    }

    #[test]
    fn test_subscription_price_falls_back_to_base() {
        assert_eq!(product(None).price_for(PurchaseType::Subscription), 1000);
    }

    #[test]
    fn test_image_at_stays_in_bounds() {
        let mut p = product(None);
        assert_eq!(p.image_at(0), Some("/images/test.jpg"));
        assert_eq!(p.image_at(1), None);

        p.images.clear();
        assert_eq!(p.image_at(0), None);
    }

    #[test]
    fn test_stock() {
        let mut p = product(None);
        assert!(p.in_stock());
        p.stock = 0;
        assert!(!p.in_stock());
    }

    #[test]
    fn test_purchase_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&PurchaseType::OneTime).unwrap(),
            "\"onetime\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseType::Subscription).unwrap(),
            "\"subscription\""
        );
        assert_eq!(PurchaseType::default(), PurchaseType::OneTime);
    }
}
