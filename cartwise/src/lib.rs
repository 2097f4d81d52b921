//! Cartwise compares a grocery cart across delivery platforms.
//!
//! Overview
//! - `ShopStore` owns the cart and the selected platform; every mutation
//!   goes through it and is published to subscribers.
//! - Each platform is evaluated against the whole cart. Platforms that can
//!   fulfil every line come first, cheapest first; the rest follow.
//! - Cart lines may be pinned to a platform, in which case that platform's
//!   price is used no matter which platform is being evaluated.
//! - Derived values are cached: the comparison once per revision, catalog
//!   listings in a bounded cache.
//!
//! Examples
//! Building a store and comparing a cart:
//! ```rust,ignore
//! use cartwise::{Catalog, ProductId, ShopStore};
//!
//! let catalog = Catalog::from_json_str(&std::fs::read_to_string("catalog.json")?)?;
//! let mut store = ShopStore::builder().catalog(catalog).build()?;
//!
//! store.add_to_cart(&ProductId::new("milk-500ml"), 2, None)?;
//! if let Some(best) = store.best_deal() {
//!     println!("cheapest: {} at {:?}", best.platform.name, best.total);
//! }
//! ```
//!
//! Watching the cart:
//! ```rust,ignore
//! let mut rx = store.subscribe();
//! tokio::spawn(async move {
//!     while rx.changed().await.is_ok() {
//!         let snap = rx.borrow_and_update().clone();
//!         println!("revision {} total {}", snap.revision, snap.total);
//!     }
//! });
//! ```
//!
//! See `cartwise/examples/` for a runnable demonstration.
#![warn(missing_docs)]

mod cache;
mod store;

pub use store::{CartSnapshot, ShopStore, ShopStoreBuilder};

// Re-export core types for convenience
pub use cartwise_core::{
    CartEntry, CartKey, Catalog, CatalogQuery, Comparison, PlatformRanker, PlatformResult,
    PriceQuote, best_deal, cart_total, line_total, price_for,
};
pub use cartwise_types::{
    CartwiseError, Decimal, Platform, PlatformId, PlatformPrice, Product, ProductId, ProductSort,
    ShopConfig, UnavailableOrder,
};
