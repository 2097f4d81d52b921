//! Per-platform cart evaluation and availability-first ranking.
//!
//! Each platform is evaluated independently against the whole cart:
//! - a platform is *available* only when every entry can be ordered there;
//! - its total is the sum of line totals, pinned entries using their own
//!   platform's price, and is only reported for available platforms;
//! - results are stably sorted by `(!available, total)`, so ties keep the
//!   order in which platforms were supplied.
//!
//! Missing price tuples never fail the evaluation; they mark the entry as
//! unavailable for that platform.

use cartwise_types::{Platform, UnavailableOrder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::pricing::line_total;

/// Outcome of evaluating the cart against a single platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformResult {
    /// Platform evaluated.
    pub platform: Platform,
    /// True when every cart entry can be ordered on this platform.
    pub available: bool,
    /// Cart total; `None` unless `available`.
    pub total: Option<Decimal>,
    /// Entries that cannot be ordered here, in cart order.
    pub unavailable_items: Vec<CartEntry>,
}

/// Stateless evaluator; safe to call repeatedly with the same inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformRanker {
    unavailable_order: UnavailableOrder,
}

impl PlatformRanker {
    /// Ranker keeping unavailable platforms in input order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unavailable_order: UnavailableOrder::InputOrder,
        }
    }

    /// Select how the unavailable group is ordered.
    #[must_use]
    pub const fn unavailable_order(mut self, order: UnavailableOrder) -> Self {
        self.unavailable_order = order;
        self
    }

    /// Evaluate `cart` against one platform.
    #[must_use]
    pub fn evaluate_platform(&self, cart: &[CartEntry], platform: &Platform) -> PlatformResult {
        let mut unavailable_items = Vec::new();
        let mut total = Decimal::ZERO;

        for entry in cart {
            // A pinned entry is still judged by the evaluated platform's stock,
            // but it needs a price on its pinned platform to be totalled.
            let stocked = entry.product.is_available_on(platform.id);
            match line_total(entry, platform.id) {
                Some(amount) if stocked => total += amount,
                _ => unavailable_items.push(entry.clone()),
            }
        }

        let available = unavailable_items.is_empty();
        PlatformResult {
            platform: platform.clone(),
            available,
            total: available.then_some(total),
            unavailable_items,
        }
    }

    /// Evaluate `cart` against every platform and return the ranked results.
    ///
    /// Duplicate platforms are evaluated independently. An empty cart makes
    /// every platform available with a zero total.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cartwise_core::ranker::evaluate",
            skip(self, cart, platforms),
            fields(entries = cart.len(), platforms = platforms.len()),
        )
    )]
    #[must_use]
    pub fn evaluate(&self, cart: &[CartEntry], platforms: &[Platform]) -> Vec<PlatformResult> {
        let mut results: Vec<PlatformResult> = platforms
            .iter()
            .map(|p| self.evaluate_platform(cart, p))
            .collect();

        let order = self.unavailable_order;
        // sort_by_key is stable: equal keys keep input order.
        results.sort_by_key(|r| {
            let missing = match order {
                UnavailableOrder::InputOrder => 0,
                UnavailableOrder::FewestMissing => r.unavailable_items.len(),
            };
            (!r.available, r.total, missing)
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            available = results.iter().filter(|r| r.available).count(),
            "evaluated platforms"
        );

        results
    }

    /// Evaluate and wrap the ranking with best-deal helpers.
    #[must_use]
    pub fn compare(&self, cart: &[CartEntry], platforms: &[Platform]) -> Comparison {
        Comparison {
            results: self.evaluate(cart, platforms),
        }
    }
}

/// First available platform of a ranked sequence, i.e. the cheapest one
/// that can fulfil the whole cart.
#[must_use]
pub fn best_deal(ranked: &[PlatformResult]) -> Option<&PlatformResult> {
    ranked.iter().find(|r| r.available)
}

/// Ranked comparison of a cart across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comparison {
    results: Vec<PlatformResult>,
}

impl Comparison {
    /// Ranked results, available platforms first.
    #[must_use]
    pub fn results(&self) -> &[PlatformResult] {
        &self.results
    }

    /// Consume the comparison, yielding the ranked results.
    #[must_use]
    pub fn into_results(self) -> Vec<PlatformResult> {
        self.results
    }

    /// Cheapest fully available platform; `None` when no platform can fulfil the cart.
    #[must_use]
    pub fn best_deal(&self) -> Option<&PlatformResult> {
        best_deal(&self.results)
    }

    /// Available platforms only, cheapest first.
    pub fn available(&self) -> impl Iterator<Item = &PlatformResult> {
        self.results.iter().filter(|r| r.available)
    }

    /// Difference between the most expensive and the cheapest available total.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        let best = self.best_deal()?.total?;
        let worst = self.available().filter_map(|r| r.total).max()?;
        Some(worst - best)
    }
}
