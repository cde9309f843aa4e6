//! Unified error handling for storefront operations.
//!
//! Only logic errors surface here: an operation that referenced a product
//! id the catalog does not know, or a cart position that no longer exists.
//! These are user-visible notices for the presentation layer and never
//! corrupt in-memory state - a failed operation performs no partial
//! mutation. Storage read/write failures are recovered inside
//! [`crate::store`] and never reach callers.

use nightmarket_core::{EntryId, ProductId};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Logic errors surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An operation referenced a product id absent from the catalog.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A cart removal referenced an entry id no line carries.
    #[error("no cart entry {0}")]
    EntryNotFound(EntryId),

    /// A cart removal referenced an invalid position.
    #[error("cart index {index} out of range ({len} item(s) in cart)")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of lines in the cart at the time of the call.
        len: usize,
    },

    /// Checkout was attempted on an empty cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// Catalog construction failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
