//! The shopping cart state machine.
//!
//! The cart is an ordered sequence of product copies; adding the same
//! product twice creates two lines, each a separate purchase unit. Every
//! line carries its own [`EntryId`] so removal can target the line itself
//! instead of a position that shifts under re-renders; positional removal
//! is still supported for the view contract, and callers using it must
//! re-derive indices after every mutation.
//!
//! Every mutation persists through the store before returning. A failed
//! operation leaves the sequence untouched.

use nightmarket_core::{EntryId, Price, Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Result, StorefrontError};
use crate::store::{JsonStore, keys};

/// One line in the cart: a product copy with a stable line identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable identity of this line, distinct from the product id.
    pub entry: EntryId,
    /// Copy of the catalog product at the time it was added.
    pub product: Product,
}

/// Summary of a simulated checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Number of lines purchased.
    pub items: usize,
    /// Full-precision total charged.
    pub total: Price,
}

/// Ordered collection of products intended for purchase.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    store: JsonStore,
}

impl Cart {
    /// Load the cart persisted in `store`, defaulting to empty.
    #[must_use]
    pub fn load(store: &JsonStore) -> Self {
        Self {
            lines: store.load(keys::CART, Vec::new()),
            store: store.clone(),
        }
    }

    /// Append a copy of the catalog product with `id` and persist.
    ///
    /// Returns the stable id of the new line.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] if the catalog has no such
    /// id; the cart is unchanged.
    pub fn add(&mut self, catalog: &Catalog, id: &ProductId) -> Result<EntryId> {
        let product = catalog
            .get(id)
            .ok_or_else(|| StorefrontError::NotFound(id.clone()))?;
        let entry = EntryId::generate();
        self.lines.push(CartLine {
            entry,
            product: product.clone(),
        });
        self.persist();
        Ok(entry)
    }

    /// Remove the line at `index` and persist. Later lines shift down.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::IndexOutOfRange`] if `index` is not a
    /// valid current position; the cart is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Product> {
        if index >= self.lines.len() {
            return Err(StorefrontError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        let line = self.lines.remove(index);
        self.persist();
        Ok(line.product)
    }

    /// Remove the line carrying `entry` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::EntryNotFound`] if no line carries the
    /// id; the cart is unchanged.
    pub fn remove(&mut self, entry: EntryId) -> Result<Product> {
        let index = self
            .lines
            .iter()
            .position(|line| line.entry == entry)
            .ok_or(StorefrontError::EntryNotFound(entry))?;
        let line = self.lines.remove(index);
        self.persist();
        Ok(line.product)
    }

    /// Reset the cart to empty and persist.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Simulate checkout: report the total, then empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::EmptyCart`] if there is nothing to buy.
    pub fn checkout(&mut self) -> Result<Receipt> {
        if self.lines.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let receipt = Receipt {
            items: self.count(),
            total: self.total(),
        };
        self.clear();
        Ok(receipt)
    }

    /// Full-precision sum of all line prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(|line| line.product.price).sum()
    }

    /// Number of lines (the badge display value).
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn persist(&self) {
        self.store.save(keys::CART, &self.lines);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, Catalog, Cart) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let cart = Cart::load(&store);
        (dir, Catalog::seed(), cart)
    }

    #[test]
    fn add_appends_copies_in_order() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p2")).unwrap();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p1"]);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn duplicate_lines_have_distinct_entries() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        assert_ne!(cart.lines()[0].entry, cart.lines()[1].entry);
    }

    #[test]
    fn concrete_scenario_totals() {
        // p1 ($89.99) + p2 ($29.99), then remove index 0.
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p2")).unwrap();
        assert_eq!(cart.total(), Price::from_cents(11998));
        assert_eq!(cart.count(), 2);

        let removed = cart.remove_at(0).unwrap();
        assert_eq!(removed.id.as_str(), "p1");
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.lines()[0].product.id.as_str(), "p2");
        assert_eq!(cart.total(), Price::from_cents(2999));
    }

    #[test]
    fn add_then_remove_last_restores_count_and_total() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p3")).unwrap();
        let (count, total) = (cart.count(), cart.total());

        cart.add(&catalog, &ProductId::from("p4")).unwrap();
        cart.remove_at(cart.count() - 1).unwrap();

        assert_eq!(cart.count(), count);
        assert_eq!(cart.total(), total);
    }

    #[test]
    fn unknown_id_fails_without_mutation() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();

        let err = cart.add(&catalog, &ProductId::from("does-not-exist")).unwrap_err();
        assert!(matches!(err, StorefrontError::NotFound(_)));
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), Price::from_cents(8999));
    }

    #[test]
    fn remove_at_out_of_range_fails_without_mutation() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();

        let err = cart.remove_at(1).unwrap_err();
        assert!(matches!(err, StorefrontError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn remove_by_entry_targets_the_right_line() {
        let (_dir, catalog, mut cart) = fixture();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        let second = cart.lines()[1].entry;

        cart.remove(second).unwrap();
        assert_eq!(cart.count(), 1);
        assert_ne!(cart.lines()[0].entry, second);

        let err = cart.remove(second).unwrap_err();
        assert!(matches!(err, StorefrontError::EntryNotFound(_)));
    }

    #[test]
    fn clear_always_zeroes() {
        let (_dir, catalog, mut cart) = fixture();
        cart.clear();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);

        cart.add(&catalog, &ProductId::from("p5")).unwrap();
        cart.add(&catalog, &ProductId::from("p6")).unwrap();
        cart.clear();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.total().display(), "$0.00");
    }

    #[test]
    fn checkout_reports_total_and_empties() {
        let (_dir, catalog, mut cart) = fixture();
        let err = cart.checkout().unwrap_err();
        assert!(matches!(err, StorefrontError::EmptyCart));

        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p2")).unwrap();
        let receipt = cart.checkout().unwrap();
        assert_eq!(receipt.items, 2);
        assert_eq!(receipt.total, Price::from_cents(11998));
        assert!(cart.is_empty());
    }

    #[test]
    fn mutations_are_immediately_durable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let catalog = Catalog::seed();

        let mut cart = Cart::load(&store);
        cart.add(&catalog, &ProductId::from("p1")).unwrap();
        cart.add(&catalog, &ProductId::from("p2")).unwrap();
        cart.remove_at(0).unwrap();

        // A fresh load from the same store observes the post-mutation state.
        let reloaded = Cart::load(&store);
        assert_eq!(reloaded.count(), 1);
        assert_eq!(reloaded.lines()[0].product.id.as_str(), "p2");
        assert_eq!(reloaded.lines()[0].entry, cart.lines()[0].entry);
    }
}
