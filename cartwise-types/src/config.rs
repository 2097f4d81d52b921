//! Configuration types shared by the ranker and the store.

use serde::{Deserialize, Serialize};

use crate::error::CartwiseError;
use crate::platform::{Platform, PlatformId};

/// Ordering applied to platforms that cannot fulfil the whole cart.
///
/// Fully available platforms always come first, sorted by total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnavailableOrder {
    /// Keep the order in which platforms were supplied.
    #[default]
    InputOrder,
    /// Platforms missing fewer cart entries come first; ties keep input order.
    FewestMissing,
}

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductSort {
    /// Catalog order.
    #[default]
    Featured,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Cheapest available price first; products available nowhere sort last.
    PriceAsc,
    /// Most expensive available price first; products available nowhere sort last.
    PriceDesc,
}

/// Global configuration for a `ShopStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Platforms offered for comparison; list order breaks ties in the ranking.
    pub platforms: Vec<Platform>,
    /// Context platform used to price unpinned cart entries in the cart view.
    pub selected_platform: PlatformId,
    /// Ordering of the unavailable group in comparisons.
    pub unavailable_order: UnavailableOrder,
    /// Maximum number of catalog queries kept in the listing cache.
    pub catalog_cache_capacity: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::all(),
            selected_platform: PlatformId::ALL[0],
            unavailable_order: UnavailableOrder::default(),
            catalog_cache_capacity: 64,
        }
    }
}

impl ShopConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `Config` if the document is malformed or fails [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, CartwiseError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the configuration can drive a store.
    ///
    /// # Errors
    /// Returns `Config` when no platforms are configured or the selected
    /// platform is not among them.
    pub fn validate(&self) -> Result<(), CartwiseError> {
        if self.platforms.is_empty() {
            return Err(CartwiseError::Config(
                "no platforms configured".to_string(),
            ));
        }
        if !self.offers(self.selected_platform) {
            return Err(CartwiseError::Config(format!(
                "selected platform {} is not configured",
                self.selected_platform
            )));
        }
        Ok(())
    }

    /// Whether `id` is one of the configured platforms.
    #[must_use]
    pub fn offers(&self, id: PlatformId) -> bool {
        self.platforms.iter().any(|p| p.id == id)
    }
}
