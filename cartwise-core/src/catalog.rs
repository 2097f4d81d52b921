use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use cartwise_types::{CartwiseError, Product, ProductId, ProductSort};
use serde::{Deserialize, Serialize};

/// Listing query over a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against product names.
    pub text: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
    /// Sort order of the listing.
    pub sort: ProductSort,
}

impl CatalogQuery {
    /// Query returning the whole catalog in catalog order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to names containing `text`; blank input clears the filter.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.text = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Restrict to one category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Select the sort order.
    #[must_use]
    pub const fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, p: &Product) -> bool {
        let text_ok = self
            .text
            .as_deref()
            .is_none_or(|t| p.name().to_lowercase().contains(&t.to_lowercase()));
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| p.category() == Some(c));
        text_ok && category_ok
    }
}

/// Read-only product catalog, loaded once and shared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in listing order.
    ///
    /// # Errors
    /// Returns `InvalidArg` when two products share an identifier.
    pub fn new<I>(products: I) -> Result<Self, CartwiseError>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut out = Self::default();
        for p in products {
            if out.index.contains_key(p.id()) {
                return Err(CartwiseError::invalid_arg(format!(
                    "duplicate product id {}",
                    p.id()
                )));
            }
            out.index.insert(p.id().clone(), out.products.len());
            out.products.push(Arc::new(p));
        }
        Ok(out)
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    /// Returns `Config` for malformed JSON or invalid products, and
    /// `InvalidArg` for duplicate identifiers.
    pub fn from_json_str(json: &str) -> Result<Self, CartwiseError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// All products in listing order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .filter_map(|p| p.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Filter and sort the catalog.
    ///
    /// Sorting is stable, so products comparing equal keep catalog order.
    #[must_use]
    pub fn query(&self, q: &CatalogQuery) -> Vec<Arc<Product>> {
        let mut out: Vec<Arc<Product>> = self
            .products
            .iter()
            .filter(|p| q.matches(p))
            .cloned()
            .collect();

        match q.sort {
            ProductSort::Featured => {}
            ProductSort::NameAsc => out.sort_by(|a, b| by_name(a, b)),
            ProductSort::NameDesc => out.sort_by(|a, b| by_name(b, a)),
            ProductSort::PriceAsc => out.sort_by(|a, b| by_price(a, b, false)),
            ProductSort::PriceDesc => out.sort_by(|a, b| by_price(a, b, true)),
        }
        out
    }
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

// Products available nowhere always sort last, whatever the direction.
fn by_price(a: &Product, b: &Product, descending: bool) -> Ordering {
    let pa = a.lowest_available_price().map(|p| p.price);
    let pb = b.lowest_available_price().map(|p| p.price);
    match (pa, pb) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
