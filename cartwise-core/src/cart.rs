use std::num::NonZeroU32;
use std::sync::Arc;

use cartwise_types::{PlatformId, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Identity of a cart line: the same product may appear once per pinned platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKey {
    /// Product the line refers to.
    pub product: ProductId,
    /// Platform the line is locked to, if any.
    pub pinned: Option<PlatformId>,
}

impl CartKey {
    /// Key for an entry priced by the context platform.
    pub fn unpinned(product: impl Into<ProductId>) -> Self {
        Self {
            product: product.into(),
            pinned: None,
        }
    }

    /// Key for an entry locked to `platform`.
    pub fn pinned(product: impl Into<ProductId>, platform: PlatformId) -> Self {
        Self {
            product: product.into(),
            pinned: Some(platform),
        }
    }
}

/// A cart line item.
///
/// The quantity is always positive; a line whose quantity drops to zero is
/// removed by the store instead of being kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Shared reference to the catalog product.
    pub product: Arc<Product>,
    /// Number of units.
    pub quantity: NonZeroU32,
    /// When set, the entry is always priced on this platform.
    pub platform: Option<PlatformId>,
}

impl CartEntry {
    /// Entry priced by whatever platform is being evaluated.
    #[must_use]
    pub const fn new(product: Arc<Product>, quantity: NonZeroU32) -> Self {
        Self {
            product,
            quantity,
            platform: None,
        }
    }

    /// Lock the entry to `platform`'s price.
    #[must_use]
    pub const fn pinned_to(mut self, platform: PlatformId) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Identity of this line within a cart.
    #[must_use]
    pub fn key(&self) -> CartKey {
        CartKey {
            product: self.product.id().clone(),
            pinned: self.platform,
        }
    }
}
