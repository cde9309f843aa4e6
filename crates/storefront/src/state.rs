//! Application state owning the catalog and all persisted session state.
//!
//! [`StorefrontState`] replaces the ambient globals of a typical demo
//! page: it is constructed explicitly and passed by reference into the
//! presentation layer, so tests can build isolated instances against
//! temporary store directories.

use nightmarket_core::{Product, ProductId};

use crate::cart::{Cart, Receipt};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::prefs::{Preferences, Profile};
use crate::store::{JsonStore, StoreError};
use crate::view::{CartView, ProductCard, ShopRequest, cart_view, product_cards};
use crate::wishlist::Wishlist;

/// Errors constructing the storefront state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The store root could not be created.
    #[error("failed to open store: {0}")]
    Store(#[from] StoreError),
    /// The configured catalog file is invalid.
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),
}

/// The storefront session: catalog, cart, wishlist, and preferences.
///
/// Cart and wishlist are owned exclusively here; all mutation goes
/// through the operations below, and each one persists before returning.
#[derive(Debug)]
pub struct StorefrontState {
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    prefs: Preferences,
    profile: Profile,
}

impl StorefrontState {
    /// Build the session state from configuration: open the store, load
    /// the catalog, and restore persisted cart/wishlist/preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created or a
    /// configured catalog file is invalid. Corrupt persisted state is not
    /// an error; it loads as the empty default.
    pub fn new(config: &StorefrontConfig) -> std::result::Result<Self, StateError> {
        let store = JsonStore::open(&config.data_dir)?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::seed(),
        };
        Ok(Self::with_catalog(catalog, &store))
    }

    /// Build session state over an already-open store. Used by tests to
    /// run against temporary directories.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, store: &JsonStore) -> Self {
        Self {
            catalog,
            cart: Cart::load(store),
            wishlist: Wishlist::load(store),
            prefs: Preferences::load(store),
            profile: Profile::new(store),
        }
    }

    /// The immutable catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart, read-only.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist, read-only.
    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Display preferences.
    #[must_use]
    pub const fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Display preferences, mutable.
    pub const fn prefs_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    /// The registered-user profile registers.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Run a shop request and annotate the results with wishlist state.
    #[must_use]
    pub fn shop(&self, request: &ShopRequest) -> Vec<ProductCard<'_>> {
        product_cards(&request.apply(&self.catalog), &self.wishlist)
    }

    /// The featured products for the home page, annotated.
    #[must_use]
    pub fn home(&self) -> Vec<ProductCard<'_>> {
        product_cards(&self.catalog.featured(), &self.wishlist)
    }

    /// The deal products, annotated.
    #[must_use]
    pub fn deals(&self) -> Vec<ProductCard<'_>> {
        product_cards(&self.catalog.deals(), &self.wishlist)
    }

    /// The cart page model.
    #[must_use]
    pub fn cart_view(&self) -> CartView<'_> {
        cart_view(&self.cart)
    }

    /// Add a product to the cart. See [`Cart::add`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::NotFound`] for unknown ids.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<()> {
        self.cart.add(&self.catalog, id)?;
        Ok(())
    }

    /// Remove the cart line at `index`. See [`Cart::remove_at`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::IndexOutOfRange`] for invalid
    /// positions.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<Product> {
        self.cart.remove_at(index)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Simulate checkout. See [`Cart::checkout`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::EmptyCart`] if the cart is empty.
    pub fn checkout(&mut self) -> Result<Receipt> {
        self.cart.checkout()
    }

    /// Toggle wishlist membership. See [`Wishlist::toggle`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::NotFound`] for unknown ids.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<bool> {
        self.wishlist.toggle(&self.catalog, id)
    }

    /// The cart, mutable. Exposed for entry-id removal.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
