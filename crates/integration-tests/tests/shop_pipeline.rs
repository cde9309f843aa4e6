//! End-to-end tests for the shop query pipeline: query-string parsing,
//! category filter, text search, stable sort, and wishlist annotation.

#![allow(clippy::unwrap_used)]

use nightmarket_core::ProductId;
use nightmarket_integration_tests::temp_state;
use nightmarket_storefront::ShopRequest;

fn ids(cards: &[nightmarket_storefront::view::ProductCard<'_>]) -> Vec<String> {
    cards.iter().map(|c| c.product.id.to_string()).collect()
}

#[test]
fn url_seeded_category_narrows_the_shop() {
    let (_dir, state) = temp_state();
    let request = ShopRequest::from_query_string("category=electronics&sort=price-asc");
    assert_eq!(ids(&state.shop(&request)), vec!["p2", "p1", "p3"]);
}

#[test]
fn unknown_url_category_shows_everything() {
    let (_dir, state) = temp_state();
    let request = ShopRequest::from_query_string("category=furniture");
    assert_eq!(state.shop(&request).len(), state.catalog().len());
}

#[test]
fn search_applies_after_category_filter() {
    let (_dir, state) = temp_state();
    let request = ShopRequest::from_query_string("category=electronics&search=wireless");
    // Featured default sort: both matches are featured, catalog order holds.
    assert_eq!(ids(&state.shop(&request)), vec!["p1", "p2"]);
}

#[test]
fn refiltering_does_not_reorder_tied_products() {
    let (_dir, state) = temp_state();

    // p2 and p9 tie on price; their relative order must survive any
    // number of re-runs and filter changes.
    let all = state.shop(&ShopRequest::from_query_string("sort=price-asc"));
    let tied_all: Vec<String> = ids(&all)
        .into_iter()
        .filter(|id| id == "p2" || id == "p9")
        .collect();

    let again = state.shop(&ShopRequest::from_query_string("sort=price-asc"));
    let tied_again: Vec<String> = ids(&again)
        .into_iter()
        .filter(|id| id == "p2" || id == "p9")
        .collect();

    assert_eq!(tied_all, vec!["p2", "p9"]);
    assert_eq!(tied_all, tied_again);
}

#[test]
fn featured_sort_keeps_groups_in_catalog_order() {
    let (_dir, state) = temp_state();
    let cards = state.shop(&ShopRequest::default());
    let listed = ids(&cards);
    assert_eq!(
        listed,
        vec!["p1", "p2", "p4", "p7", "p3", "p5", "p6", "p8", "p9"]
    );
}

#[test]
fn home_and_deals_mirror_the_flags() {
    let (_dir, state) = temp_state();
    assert_eq!(ids(&state.home()), vec!["p1", "p2", "p4", "p7"]);
    assert_eq!(ids(&state.deals()), vec!["p1", "p3", "p5", "p6", "p8"]);
}

#[test]
fn shop_cards_carry_wishlist_hearts() {
    let (_dir, mut state) = temp_state();
    state.toggle_wishlist(&ProductId::from("p7")).unwrap();

    let cards = state.shop(&ShopRequest::from_query_string("category=home"));
    let hearts: Vec<(&str, bool)> = cards
        .iter()
        .map(|c| (c.product.id.as_str(), c.in_wishlist))
        .collect();
    assert_eq!(hearts, vec![("p7", true), ("p6", false)]);
}
