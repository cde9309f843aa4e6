//! The wishlist state machine.
//!
//! A set of products keyed by id, with a single transition: `toggle`
//! flips membership. Backing storage is an insertion-ordered vector so
//! the persisted JSON is deterministic - toggling an id twice restores
//! the previously persisted content exactly.

use nightmarket_core::{Product, ProductId};

use crate::catalog::Catalog;
use crate::error::{Result, StorefrontError};
use crate::store::{JsonStore, keys};

/// Set of products a user has marked for later interest.
#[derive(Debug)]
pub struct Wishlist {
    products: Vec<Product>,
    store: JsonStore,
}

impl Wishlist {
    /// Load the wishlist persisted in `store`, defaulting to empty.
    #[must_use]
    pub fn load(store: &JsonStore) -> Self {
        Self {
            products: store.load(keys::WISHLIST, Vec::new()),
            store: store.clone(),
        }
    }

    /// Flip membership of the product with `id` and persist.
    ///
    /// Returns the new membership state: `true` if the product was just
    /// added, `false` if it was just removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] if the catalog has no such
    /// id; the wishlist is unchanged.
    pub fn toggle(&mut self, catalog: &Catalog, id: &ProductId) -> Result<bool> {
        let product = catalog
            .get(id)
            .ok_or_else(|| StorefrontError::NotFound(id.clone()))?;

        let member = if let Some(index) = self.products.iter().position(|p| &p.id == id) {
            self.products.remove(index);
            false
        } else {
            self.products.push(product.clone());
            true
        };
        self.persist();
        Ok(member)
    }

    /// Membership test. No side effect.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    /// The wishlisted products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn persist(&self) {
        self.store.save(keys::WISHLIST, &self.products);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, Catalog, Wishlist) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let wishlist = Wishlist::load(&store);
        (dir, Catalog::seed(), wishlist)
    }

    #[test]
    fn concrete_scenario_toggle_p9() {
        // toggling p9 on an empty wishlist, twice.
        let (_dir, catalog, mut wishlist) = fixture();
        let id = ProductId::from("p9");

        assert!(wishlist.toggle(&catalog, &id).unwrap());
        assert!(wishlist.contains(&id));

        assert!(!wishlist.toggle(&catalog, &id).unwrap());
        assert!(!wishlist.contains(&id));
    }

    #[test]
    fn unknown_id_fails_without_mutation() {
        let (_dir, catalog, mut wishlist) = fixture();
        wishlist.toggle(&catalog, &ProductId::from("p8")).unwrap();

        let err = wishlist
            .toggle(&catalog, &ProductId::from("does-not-exist"))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::NotFound(_)));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductId::from("p8")));
    }

    #[test]
    fn no_duplicates_no_quantity() {
        let (_dir, catalog, mut wishlist) = fixture();
        let id = ProductId::from("p4");
        wishlist.toggle(&catalog, &id).unwrap();
        wishlist.toggle(&catalog, &id).unwrap();
        wishlist.toggle(&catalog, &id).unwrap();
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn double_toggle_restores_persisted_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let catalog = Catalog::seed();

        let mut wishlist = Wishlist::load(&store);
        wishlist.toggle(&catalog, &ProductId::from("p1")).unwrap();
        wishlist.toggle(&catalog, &ProductId::from("p5")).unwrap();
        let before = std::fs::read(dir.path().join("nm_wishlist.json")).unwrap();

        wishlist.toggle(&catalog, &ProductId::from("p9")).unwrap();
        wishlist.toggle(&catalog, &ProductId::from("p9")).unwrap();

        let after = std::fs::read(dir.path().join("nm_wishlist.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn mutations_are_immediately_durable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let catalog = Catalog::seed();

        let mut wishlist = Wishlist::load(&store);
        wishlist.toggle(&catalog, &ProductId::from("p2")).unwrap();

        let reloaded = Wishlist::load(&store);
        assert!(reloaded.contains(&ProductId::from("p2")));
        assert_eq!(reloaded.len(), 1);
    }
}
