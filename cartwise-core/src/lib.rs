//! cartwise-core
//!
//! Pure pricing and ranking logic shared across the cartwise ecosystem.
//!
//! - `cart`: cart line items (`CartEntry`) and their identity keys.
//! - `pricing`: per-entry price resolution and cart totals.
//! - `ranker`: per-platform evaluation and the availability-first ranking.
//! - `catalog`: read-only product lookup, filtering and sorting.
//!
//! Nothing here performs I/O or holds hidden state: every operation is a
//! function of its inputs and may be recomputed freely.
#![warn(missing_docs)]

/// Cart line items.
pub mod cart;
/// Read-only catalog lookups and listing queries.
pub mod catalog;
/// Price resolution for cart entries.
pub mod pricing;
/// Platform evaluation and ranking.
pub mod ranker;

pub use cart::{CartEntry, CartKey};
pub use catalog::{Catalog, CatalogQuery};
pub use pricing::{PriceQuote, cart_total, line_total, price_for};
pub use ranker::{Comparison, PlatformRanker, PlatformResult, best_deal};

pub use cartwise_types::{
    CartwiseError, Decimal, Platform, PlatformId, PlatformPrice, Product, ProductId, ProductSort,
    ShopConfig, UnavailableOrder,
};
