//! Product Catalog
//!
//! Static in-memory catalog. The storefront only reads it; creation and
//! maintenance of product data happen outside this codebase.

use std::sync::LazyLock;

use crate::product::Product;

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: "ember-mug".into(),
            name: "Ember Travel Mug".into(),
            description: "Temperature-controlled travel mug with a 3-hour battery.".into(),
            price: 12999,
            subscription_price: None,
            stock: 24,
            category: "Kitchen".into(),
            images: vec![
                "/images/ember-mug-front.jpg".into(),
                "/images/ember-mug-side.jpg".into(),
                "/images/ember-mug-lid.jpg".into(),
            ],
            features: vec![
                "Keeps drinks at your set temperature".into(),
                "App-controlled presets".into(),
                "Dishwasher-safe lid".into(),
            ],
            is_subscription: false,
        },
        Product {
            id: "roast-club".into(),
            name: "Single-Origin Roast Club".into(),
            description: "A rotating single-origin coffee, roasted to order.".into(),
            price: 2400,
            subscription_price: Some(1900),
            stock: 120,
            category: "Coffee".into(),
            images: vec![
                "/images/roast-club-bag.jpg".into(),
                "/images/roast-club-beans.jpg".into(),
            ],
            features: vec![
                "12oz whole bean".into(),
                "New origin every month".into(),
                "Skip or cancel anytime".into(),
            ],
            is_subscription: true,
        },
        Product {
            id: "filter-refills".into(),
            name: "Charcoal Filter Refills".into(),
            description: "Three-pack of replacement charcoal water filters.".into(),
            price: 1500,
            subscription_price: None,
            stock: 300,
            category: "Kitchen".into(),
            images: vec!["/images/filter-refills.jpg".into()],
            features: vec![],
            is_subscription: true,
        },
        Product {
            id: "copper-kettle".into(),
            name: "Copper Pour-Over Kettle".into(),
            description: "Gooseneck kettle with a precision spout. Currently sold out.".into(),
            price: 8900,
            subscription_price: None,
            stock: 0,
            category: "Kitchen".into(),
            images: vec![
                "/images/copper-kettle.jpg".into(),
                "/images/copper-kettle-detail.jpg".into(),
            ],
            features: vec!["1.0L capacity".into(), "Thermometer in the lid".into()],
            is_subscription: false,
        },
    ]
});

/// All products, in catalog order.
pub fn all_products() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by identifier. Linear scan; the catalog is tiny.
pub fn find_product(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_product() {
        let product = find_product("roast-club").expect("catalog product");
        assert_eq!(product.name, "Single-Origin Roast Club");
        assert!(product.is_subscription);
    }

    #[test]
    fn test_find_unknown_product() {
        assert!(find_product("no-such-product").is_none());
    }

    #[test]
    fn test_catalog_images_are_never_empty() {
        for product in all_products() {
            assert!(!product.images.is_empty(), "{} has no images", product.id);
        }
    }

    #[test]
    fn test_catalog_has_an_out_of_stock_product() {
        assert!(all_products().iter().any(|p| !p.in_stock()));
    }
}
