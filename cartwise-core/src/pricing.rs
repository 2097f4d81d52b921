use cartwise_types::PlatformId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;

/// Resolved unit price of a cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Platform whose price tuple was used.
    pub platform: PlatformId,
    /// Unit price; `None` when the product is not listed on `platform`.
    pub amount: Option<Decimal>,
    /// Whether the product can be ordered on `platform`.
    pub available: bool,
}

/// Resolve the unit price of `entry` in the context of `context`.
///
/// A pinned entry always uses its own platform; otherwise `context` is used.
/// A missing price tuple degrades to an unavailable quote without an amount.
/// The cart view and the comparison view both go through this function so
/// that they never disagree.
#[must_use]
pub fn price_for(entry: &CartEntry, context: PlatformId) -> PriceQuote {
    let platform = entry.platform.unwrap_or(context);
    match entry.product.price_on(platform) {
        Some(p) => PriceQuote {
            platform,
            amount: Some(p.price),
            available: p.available,
        },
        None => PriceQuote {
            platform,
            amount: None,
            available: false,
        },
    }
}

/// Unit price times quantity, when a price is known.
#[must_use]
pub fn line_total(entry: &CartEntry, context: PlatformId) -> Option<Decimal> {
    price_for(entry, context)
        .amount
        .map(|unit| unit * Decimal::from(entry.quantity.get()))
}

/// Sum of line totals for the cart view.
///
/// Lines without a known price contribute nothing; availability is not
/// checked here (see [`crate::PlatformRanker`] for that).
#[must_use]
pub fn cart_total(cart: &[CartEntry], context: PlatformId) -> Decimal {
    cart.iter()
        .filter_map(|e| line_total(e, context))
        .sum()
}
