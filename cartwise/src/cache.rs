use std::sync::{Arc, OnceLock};

use cartwise_core::{Catalog, CatalogQuery, Comparison, Product};
use moka::sync::Cache;

/// Last comparison computed for the current cart revision.
///
/// Reset on every mutation; filled lazily on the next read.
#[derive(Debug, Default)]
pub(crate) struct ComparisonMemo {
    cell: OnceLock<Arc<Comparison>>,
}

impl ComparisonMemo {
    pub(crate) fn get_or_compute(&self, f: impl FnOnce() -> Comparison) -> Arc<Comparison> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(f())))
    }

    pub(crate) fn invalidate(&mut self) {
        self.cell = OnceLock::new();
    }

    pub(crate) fn is_cached(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Bounded cache of catalog listings keyed by query.
///
/// The catalog is read-only, so entries never go stale; the bound only
/// limits memory.
pub(crate) struct ListingCache {
    inner: Cache<CatalogQuery, Arc<Vec<Arc<Product>>>>,
}

impl ListingCache {
    pub(crate) fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity.max(1)),
        }
    }

    pub(crate) fn get_or_query(&self, catalog: &Catalog, q: &CatalogQuery) -> Arc<Vec<Arc<Product>>> {
        self.inner
            .get_with_by_ref(q, || Arc::new(catalog.query(q)))
    }

    pub(crate) fn contains(&self, q: &CatalogQuery) -> bool {
        self.inner.contains_key(q)
    }
}

impl std::fmt::Debug for ListingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}
