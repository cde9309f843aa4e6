//! The product record.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A product in the store.
///
/// Products are defined when the catalog is constructed and never mutated
/// afterwards. Cart and wishlist entries hold copies by value, which is
/// also the shape persisted to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stable for the process lifetime.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Product category.
    pub category: Category,
    /// Non-negative price.
    pub price: Price,
    /// Image URI (relative asset path or absolute URL).
    pub image: String,
    /// Highlighted on the home page and first in the default sort.
    pub featured: bool,
    /// Promotional ("deal") status.
    pub deal: bool,
}
