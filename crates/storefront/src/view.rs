//! Render-ready projections for the presentation layer.
//!
//! The presentation layer (the CLI here, a product grid in a web front
//! end) consumes these pure derivations and feeds user actions back as a
//! product id or a cart position. Nothing in this module mutates state.

use nightmarket_core::{CategoryFilter, EntryId, Price, Product, SortKey};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::wishlist::Wishlist;

/// The current filter/search/sort selections of a shop view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopRequest {
    /// Category selection, defaulting to all.
    pub category: CategoryFilter,
    /// Search text; blank matches everything.
    pub search: String,
    /// Sort order, defaulting to featured-first.
    pub sort: SortKey,
}

impl ShopRequest {
    /// Parse selections from a URL query string such as
    /// `category=fashion&sort=price-asc`.
    ///
    /// Unknown keys are ignored; invalid category and sort values fall
    /// back to their defaults, never failing.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut request = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" => request.category = CategoryFilter::parse(&value),
                "search" => request.search = value.into_owned(),
                "sort" => request.sort = SortKey::parse(&value),
                _ => {}
            }
        }
        request
    }

    /// Run this request against a catalog.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.query(self.category, &self.search, self.sort)
    }
}

/// A product annotated with its wishlist membership, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard<'a> {
    /// The catalog product.
    pub product: &'a Product,
    /// Whether the wishlist heart is filled.
    pub in_wishlist: bool,
}

/// Annotate a product list with current wishlist membership.
#[must_use]
pub fn product_cards<'a>(products: &[&'a Product], wishlist: &Wishlist) -> Vec<ProductCard<'a>> {
    products
        .iter()
        .map(|product| ProductCard {
            product,
            in_wishlist: wishlist.contains(&product.id),
        })
        .collect()
}

/// One cart line with its current position, ready to render.
///
/// Positions are only valid until the next mutation; re-derive the view
/// after every add or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView<'a> {
    /// Current position, usable with `Cart::remove_at`.
    pub index: usize,
    /// Stable line id, usable with `Cart::remove`.
    pub entry: EntryId,
    /// The product on this line.
    pub product: &'a Product,
}

/// The cart page model: lines, running total, badge count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView<'a> {
    /// Lines in cart order.
    pub lines: Vec<CartLineView<'a>>,
    /// Full-precision total; round only when displaying.
    pub total: Price,
    /// Badge count.
    pub count: usize,
}

/// Derive the cart page model.
#[must_use]
pub fn cart_view(cart: &Cart) -> CartView<'_> {
    CartView {
        lines: cart
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| CartLineView {
                index,
                entry: line.entry,
                product: &line.product,
            })
            .collect(),
        total: cart.total(),
        count: cart.count(),
    }
}
