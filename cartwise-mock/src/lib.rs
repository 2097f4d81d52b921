//! Deterministic fixture data for cartwise tests and examples.
//!
//! Prices are in rupees with two decimal places. The catalog is chosen so
//! that every interesting ranking case is reachable:
//! - `milk-500ml` and `atta-5kg` are listed everywhere;
//! - `brown-bread` is out of stock on Zepto and not listed on JioMart;
//! - `saffron-1g` is not available anywhere.

use cartwise_types::{Platform, PlatformId, Product};

mod fixtures;

/// Identifiers of fixture products, in catalog order.
pub const PRODUCT_IDS: [&str; 8] = [
    "milk-500ml",
    "atta-5kg",
    "brown-bread",
    "eggs-6",
    "banana-1dz",
    "cola-750ml",
    "chips-52g",
    "saffron-1g",
];

/// The fixture platforms, in the order a store would offer them.
#[must_use]
pub fn platforms() -> Vec<Platform> {
    vec![
        Platform::new(PlatformId::Blinkit, "Blinkit"),
        Platform::new(PlatformId::Zepto, "Zepto"),
        Platform::new(PlatformId::Instamart, "Swiggy Instamart"),
        Platform::new(PlatformId::JioMart, "JioMart"),
    ]
}

/// Every fixture product, in catalog order.
#[must_use]
pub fn products() -> Vec<Product> {
    PRODUCT_IDS.iter().filter_map(|id| product(id)).collect()
}

/// A single fixture product by identifier.
#[must_use]
pub fn product(id: &str) -> Option<Product> {
    fixtures::by_id(id)
}

/// The fixture catalog as a JSON array, as a store would load it.
#[must_use]
pub const fn catalog_json() -> &'static str {
    fixtures::CATALOG_JSON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_id_resolves() {
        assert_eq!(products().len(), PRODUCT_IDS.len());
        for id in PRODUCT_IDS {
            assert_eq!(product(id).map(|p| p.id().to_string()).as_deref(), Some(id));
        }
    }
}
