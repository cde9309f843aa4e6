//! The immutable product catalog and its query primitives.
//!
//! The catalog is constructed once at startup - from the built-in seed or
//! a JSON file - and is read-only afterwards. Query operations never
//! mutate the list; each returns a fresh sequence of references in a
//! well-defined order.
//!
//! The combined shop pipeline is [`Catalog::query`]: category filter,
//! then text search, then sort - in that fixed order. Sorting always
//! happens last, after all filtering.

use std::collections::HashSet;
use std::path::Path;

use nightmarket_core::{Category, CategoryFilter, Price, Product, ProductId, SortKey};
use thiserror::Error;

/// Errors constructing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog file is not a valid product list.
    #[error("failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fixed set of purchasable products for the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// The list order becomes the stable catalog order used as the default
    /// iteration order and as the tie-break for every sort.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, not a product array, or
    /// contains duplicate ids.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        Self::new(products)
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn seed() -> Self {
        let products = vec![
            seed_product("p1", "Wireless Headphones", Category::Electronics, 8999, "image3.jpg", true, true),
            seed_product("p2", "Wireless Mouse", Category::Electronics, 2999, "image3.jpg", true, false),
            seed_product("p3", "Mechanical Keyboard", Category::Electronics, 11999, "image4.jpg", false, true),
            seed_product("p4", "Classic Sneakers", Category::Fashion, 7999, "image5.jpg", true, false),
            seed_product("p5", "Denim Jacket", Category::Fashion, 9995, "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=1200&q=80&auto=format&fit=crop", false, true),
            seed_product("p6", "Ceramic Coffee Maker", Category::Home, 5999, "https://images.unsplash.com/photo-1503602642458-232111445657?w=1200&q=80&auto=format&fit=crop", false, true),
            seed_product("p7", "Modern Rug", Category::Home, 12900, "image6.jpg", true, false),
            seed_product("p8", "Luxury Serum", Category::Beauty, 4500, "image8.jpg", false, true),
            seed_product("p9", "Spa Candle Gift Set", Category::Beauty, 2999, "image9.jpg", false, false),
        ];
        // Seed ids are distinct by construction.
        Self { products }
    }

    /// The full product list in stable catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products passing the category filter, in catalog order.
    #[must_use]
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Products with the featured flag, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products with the deal flag, in catalog order.
    #[must_use]
    pub fn deals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.deal).collect()
    }

    /// Case-insensitive substring match against product names.
    ///
    /// Blank text matches everything.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&Product> {
        let needle = text.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Sort a product list by `key`.
    ///
    /// All sorts are stable: products that compare equal keep their input
    /// order, so re-filtering never visibly reorders tied items.
    #[must_use]
    pub fn sorted<'a>(mut list: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
        match key {
            SortKey::Featured => list.sort_by_key(|p| !p.featured),
            SortKey::PriceAsc => list.sort_by_key(|p| p.price),
            SortKey::PriceDesc => list.sort_by_key(|p| std::cmp::Reverse(p.price)),
        }
        list
    }

    /// The combined shop pipeline: category filter, then text search, then
    /// sort.
    #[must_use]
    pub fn query(&self, filter: CategoryFilter, search: &str, sort: SortKey) -> Vec<&Product> {
        let needle = search.trim().to_lowercase();
        let list = self
            .products
            .iter()
            .filter(|p| filter.matches(p.category))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect();
        Self::sorted(list, sort)
    }
}

fn seed_product(
    id: &str,
    name: &str,
    category: Category,
    price_cents: i64,
    image: &str,
    featured: bool,
    deal: bool,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        category,
        price: Price::from_cents(price_cents),
        image: image.to_owned(),
        featured,
        deal,
    }
}
