//! Nightmarket Storefront - catalog, cart, and wishlist core.
//!
//! This crate is the logic layer of the storefront demo: an immutable
//! product [`catalog`] with filter/search/sort queries, the [`cart`] and
//! [`wishlist`] state machines, and the JSON key-value [`store`] every
//! mutation is flushed through.
//!
//! # Architecture
//!
//! - All state is explicitly owned: construct a [`state::StorefrontState`]
//!   and pass it by reference. There are no ambient globals, so tests can
//!   build isolated instances against temporary store directories.
//! - Execution is single-threaded and synchronous. Every mutating
//!   operation updates memory and persists before returning; a read
//!   immediately after a mutation observes the post-mutation state.
//! - Storage failures never propagate: corrupt data loads as the default
//!   and failed writes are logged, keeping the session alive.
//!
//! Rendering, routing, and the signup modal live outside this crate. The
//! [`view`] module defines the projections the presentation layer consumes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod cart;
pub mod config;
pub mod error;
pub mod prefs;
pub mod state;
pub mod store;
pub mod view;
pub mod wishlist;

pub use catalog::{Catalog, CatalogError};
pub use cart::{Cart, CartLine, Receipt};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use prefs::{DisplayMode, Preferences, Profile, RegisteredUser};
pub use state::{StateError, StorefrontState};
pub use store::JsonStore;
pub use view::{ShopRequest, cart_view, product_cards};
pub use wishlist::Wishlist;
