//! Core types for Nightmarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod sort;

pub use category::{Category, CategoryFilter};
pub use id::{EntryId, ProductId};
pub use price::Price;
pub use product::Product;
pub use sort::SortKey;
