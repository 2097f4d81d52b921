use std::num::NonZeroU32;
use std::sync::Arc;

use cartwise_core::{
    CartEntry, CartKey, Catalog, CatalogQuery, Comparison, PlatformRanker, PlatformResult,
    cart_total, line_total,
};
use cartwise_types::{
    CartwiseError, Decimal, Platform, PlatformId, Product, ProductId, ShopConfig,
    UnavailableOrder,
};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::cache::{ComparisonMemo, ListingCache};

/// State published to subscribers after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Monotonic revision; bumped by every mutation.
    pub revision: u64,
    /// Cart lines in insertion order.
    pub entries: Vec<CartEntry>,
    /// Context platform of the cart view.
    pub selected_platform: PlatformId,
    /// Cart total on the selected platform.
    pub total: Decimal,
}

/// Single owner of the cart and the selected platform.
///
/// All mutations go through the methods below; each one bumps the revision,
/// drops the memoized comparison and notifies subscribers.
pub struct ShopStore {
    catalog: Arc<Catalog>,
    cfg: ShopConfig,
    ranker: PlatformRanker,
    cart: Vec<CartEntry>,
    revision: u64,
    comparison: ComparisonMemo,
    listings: ListingCache,
    tx: watch::Sender<CartSnapshot>,
}

/// Builder for constructing a `ShopStore` with custom configuration.
pub struct ShopStoreBuilder {
    catalog: Option<Arc<Catalog>>,
    cfg: ShopConfig,
}

impl Default for ShopStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopStoreBuilder {
    /// Create a new builder with default configuration and no catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            cfg: ShopConfig::default(),
        }
    }

    /// Use `catalog` as the read-only product source.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ShopConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Platforms offered for comparison; order breaks ranking ties.
    ///
    /// If the currently selected platform is not in the list, the first
    /// platform becomes the selection.
    #[must_use]
    pub fn platforms(mut self, platforms: Vec<Platform>) -> Self {
        if let Some(first) = platforms.first()
            && !platforms.iter().any(|p| p.id == self.cfg.selected_platform)
        {
            self.cfg.selected_platform = first.id;
        }
        self.cfg.platforms = platforms;
        self
    }

    /// Initial context platform of the cart view.
    #[must_use]
    pub const fn selected_platform(mut self, id: PlatformId) -> Self {
        self.cfg.selected_platform = id;
        self
    }

    /// Ordering of platforms that cannot fulfil the cart.
    #[must_use]
    pub const fn unavailable_order(mut self, order: UnavailableOrder) -> Self {
        self.cfg.unavailable_order = order;
        self
    }

    /// Maximum number of cached catalog listings.
    #[must_use]
    pub const fn catalog_cache_capacity(mut self, capacity: u64) -> Self {
        self.cfg.catalog_cache_capacity = capacity;
        self
    }

    /// Build the store with an empty cart.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no catalog was supplied and `Config` if the
    /// configuration fails validation.
    pub fn build(self) -> Result<ShopStore, CartwiseError> {
        let Some(catalog) = self.catalog else {
            return Err(CartwiseError::invalid_arg(
                "no catalog supplied; add one via catalog(...)",
            ));
        };
        self.cfg.validate()?;

        let ranker = PlatformRanker::new().unavailable_order(self.cfg.unavailable_order);
        let (tx, _) = watch::channel(CartSnapshot {
            revision: 0,
            entries: Vec::new(),
            selected_platform: self.cfg.selected_platform,
            total: Decimal::ZERO,
        });

        Ok(ShopStore {
            catalog,
            listings: ListingCache::new(self.cfg.catalog_cache_capacity),
            cfg: self.cfg,
            ranker,
            cart: Vec::new(),
            revision: 0,
            comparison: ComparisonMemo::default(),
            tx,
        })
    }
}

impl ShopStore {
    /// Start building a new store.
    #[must_use]
    pub fn builder() -> ShopStoreBuilder {
        ShopStoreBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopConfig {
        &self.cfg
    }

    /// Shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current revision; starts at 0 and grows by one per mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    /// Line with the given key, if present.
    #[must_use]
    pub fn entry(&self, key: &CartKey) -> Option<&CartEntry> {
        self.cart.iter().find(|e| e.key() == *key)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.iter().map(|e| u64::from(e.quantity.get())).sum()
    }

    /// Context platform of the cart view.
    #[must_use]
    pub const fn selected_platform(&self) -> PlatformId {
        self.cfg.selected_platform
    }

    /// Cart total on the selected platform.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        cart_total(&self.cart, self.cfg.selected_platform)
    }

    /// Line total of one entry on the selected platform.
    #[must_use]
    pub fn line_total(&self, key: &CartKey) -> Option<Decimal> {
        self.entry(key)
            .and_then(|e| line_total(e, self.cfg.selected_platform))
    }

    /// Add `quantity` units of a product, merging with an existing line of
    /// the same product and pinned platform.
    ///
    /// # Errors
    /// - `InvalidArg` if `quantity` is zero or `pinned` is not a configured platform.
    /// - `NotFound` if the product is not in the catalog.
    pub fn add_to_cart(
        &mut self,
        product: &ProductId,
        quantity: u32,
        pinned: Option<PlatformId>,
    ) -> Result<CartKey, CartwiseError> {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return Err(CartwiseError::invalid_arg("quantity must be positive"));
        };
        if let Some(p) = pinned
            && !self.cfg.offers(p)
        {
            return Err(CartwiseError::invalid_arg(format!(
                "platform {p} is not configured"
            )));
        }
        let product: Arc<Product> = self
            .catalog
            .get(product)
            .cloned()
            .ok_or_else(|| CartwiseError::not_found(format!("product {product}")))?;

        let key = CartKey {
            product: product.id().clone(),
            pinned,
        };
        if let Some(existing) = self.cart.iter_mut().find(|e| e.key() == key) {
            existing.quantity = existing.quantity.saturating_add(quantity.get());
        } else {
            let mut entry = CartEntry::new(product, quantity);
            entry.platform = pinned;
            self.cart.push(entry);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(product = %key.product, quantity = quantity.get(), "added to cart");

        self.commit();
        Ok(key)
    }

    /// Set the quantity of a line; zero removes it.
    ///
    /// # Errors
    /// Returns `NotFound` if no line has this key.
    pub fn update_quantity(&mut self, key: &CartKey, quantity: u32) -> Result<(), CartwiseError> {
        let Some(pos) = self.cart.iter().position(|e| e.key() == *key) else {
            return Err(CartwiseError::not_found(format!(
                "cart entry for {}",
                key.product
            )));
        };
        match NonZeroU32::new(quantity) {
            Some(q) => self.cart[pos].quantity = q,
            None => {
                self.cart.remove(pos);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(product = %key.product, quantity, "updated cart quantity");

        self.commit();
        Ok(())
    }

    /// Remove a line, returning it if it was present.
    pub fn remove(&mut self, key: &CartKey) -> Option<CartEntry> {
        let pos = self.cart.iter().position(|e| e.key() == *key)?;
        let removed = self.cart.remove(pos);

        #[cfg(feature = "tracing")]
        tracing::debug!(product = %key.product, "removed from cart");

        self.commit();
        Some(removed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        self.cart.clear();
        self.commit();
    }

    /// Change the context platform of the cart view.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `id` is not a configured platform.
    pub fn select_platform(&mut self, id: PlatformId) -> Result<(), CartwiseError> {
        if !self.cfg.offers(id) {
            return Err(CartwiseError::invalid_arg(format!(
                "platform {id} is not configured"
            )));
        }
        if self.cfg.selected_platform != id {
            self.cfg.selected_platform = id;
            self.commit();
        }
        Ok(())
    }

    /// Ranked comparison of the cart across configured platforms.
    ///
    /// Computed at most once per revision.
    #[must_use]
    pub fn comparison(&self) -> Arc<Comparison> {
        self.comparison
            .get_or_compute(|| self.ranker.compare(&self.cart, &self.cfg.platforms))
    }

    /// Whether the comparison for the current revision is already computed.
    #[must_use]
    pub fn is_comparison_cached(&self) -> bool {
        self.comparison.is_cached()
    }

    /// Cheapest configured platform able to fulfil the whole cart.
    #[must_use]
    pub fn best_deal(&self) -> Option<PlatformResult> {
        self.comparison().best_deal().cloned()
    }

    /// Receiver notified with a fresh snapshot after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.tx.subscribe()
    }

    /// Current state as published to subscribers.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            revision: self.revision,
            entries: self.cart.clone(),
            selected_platform: self.cfg.selected_platform,
            total: self.cart_total(),
        }
    }

    /// Filtered and sorted catalog listing, served from the listing cache.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cartwise::store::browse", skip(self), fields(sort = ?query.sort))
    )]
    #[must_use]
    pub fn browse(&self, query: &CatalogQuery) -> Arc<Vec<Arc<Product>>> {
        self.listings.get_or_query(&self.catalog, query)
    }

    /// Whether `query` is currently held in the listing cache.
    #[must_use]
    pub fn is_listing_cached(&self, query: &CatalogQuery) -> bool {
        self.listings.contains(query)
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.comparison.invalidate();
        self.tx.send_replace(self.snapshot());
    }
}

impl std::fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopStore")
            .field("revision", &self.revision)
            .field("entries", &self.cart.len())
            .field("selected_platform", &self.cfg.selected_platform)
            .field("listings", &self.listings)
            .finish_non_exhaustive()
    }
}
