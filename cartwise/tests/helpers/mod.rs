use cartwise::{Catalog, ProductId, ShopStore};

#[allow(dead_code)]
pub const MILK: &str = "milk-500ml";
#[allow(dead_code)]
pub const ATTA: &str = "atta-5kg";
#[allow(dead_code)]
pub const BREAD: &str = "brown-bread";
#[allow(dead_code)]
pub const SAFFRON: &str = "saffron-1g";

pub fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

#[allow(dead_code)]
pub fn catalog() -> Catalog {
    Catalog::new(cartwise_mock::products()).unwrap()
}

/// Store over the fixture catalog and platforms, Blinkit selected.
pub fn store() -> ShopStore {
    ShopStore::builder()
        .catalog(catalog())
        .platforms(cartwise_mock::platforms())
        .build()
        .unwrap()
}
