//! Nightmarket Core - Shared types library.
//!
//! This crate provides common types used across all Nightmarket components:
//! - `storefront` - Catalog queries, cart and wishlist state, persistence
//! - `cli` - Command-line storefront driver (the view layer of the demo)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, ids, prices, categories, and sort keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
