//! Catalog products and their per-platform price lists.

use core::fmt;
use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CartwiseError;
use crate::platform::PlatformId;

/// Stable product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Price of a product on one platform.
///
/// An unavailable entry still reports the last known price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPrice {
    /// Platform the price applies to.
    pub platform: PlatformId,
    /// Unit price in the catalog currency.
    pub price: Decimal,
    /// Whether the product can currently be ordered on this platform.
    pub available: bool,
}

impl PlatformPrice {
    /// Price tuple for a product in stock.
    #[must_use]
    pub const fn available(platform: PlatformId, price: Decimal) -> Self {
        Self {
            platform,
            price,
            available: true,
        }
    }

    /// Price tuple for a product that is out of stock.
    #[must_use]
    pub const fn unavailable(platform: PlatformId, price: Decimal) -> Self {
        Self {
            platform,
            price,
            available: false,
        }
    }
}

#[derive(Deserialize)]
struct RawProduct {
    id: ProductId,
    name: String,
    unit: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    prices: Vec<PlatformPrice>,
}

/// Read-only catalog product.
///
/// Behavior:
/// - The price list holds at most one entry per platform; this is checked on
///   construction and on deserialization.
/// - Prices are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    id: ProductId,
    name: String,
    unit: String,
    category: Option<String>,
    prices: Vec<PlatformPrice>,
}

impl TryFrom<RawProduct> for Product {
    type Error = CartwiseError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let mut product = Self::new(raw.id, raw.name, raw.unit, raw.prices)?;
        product.category = raw.category;
        Ok(product)
    }
}

impl Product {
    /// Build a product, validating its price list.
    ///
    /// # Errors
    /// Returns `DuplicatePlatformPrice` if a platform appears twice and
    /// `NegativePrice` if any price is below zero.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit: impl Into<String>,
        prices: Vec<PlatformPrice>,
    ) -> Result<Self, CartwiseError> {
        let id = id.into();
        let mut seen: HashSet<PlatformId> = HashSet::with_capacity(prices.len());
        for p in &prices {
            if !seen.insert(p.platform) {
                return Err(CartwiseError::DuplicatePlatformPrice {
                    product: id.to_string(),
                    platform: p.platform,
                });
            }
            if p.price.is_sign_negative() && !p.price.is_zero() {
                return Err(CartwiseError::NegativePrice {
                    product: id.to_string(),
                    platform: p.platform,
                });
            }
        }
        Ok(Self {
            id,
            name: name.into(),
            unit: unit.into(),
            category: None,
            prices,
        })
    }

    /// Attach a category label used for catalog filtering.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Product identifier.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit label, e.g. "500 ml".
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Optional category label.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// All price tuples in listing order.
    #[must_use]
    pub fn prices(&self) -> &[PlatformPrice] {
        &self.prices
    }

    /// Price tuple for `platform`, if the product is listed there.
    #[must_use]
    pub fn price_on(&self, platform: PlatformId) -> Option<&PlatformPrice> {
        self.prices.iter().find(|p| p.platform == platform)
    }

    /// Whether the product can be ordered on `platform`.
    #[must_use]
    pub fn is_available_on(&self, platform: PlatformId) -> bool {
        self.price_on(platform).is_some_and(|p| p.available)
    }

    /// Cheapest price among platforms where the product is available.
    #[must_use]
    pub fn lowest_available_price(&self) -> Option<&PlatformPrice> {
        self.prices
            .iter()
            .filter(|p| p.available)
            .min_by(|a, b| a.price.cmp(&b.price))
    }
}
