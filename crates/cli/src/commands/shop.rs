//! Product listing pages: home, shop, and deals.

use nightmarket_storefront::view::ProductCard;
use nightmarket_storefront::{ShopRequest, StorefrontState};

/// Render the featured picks (the home page grid).
pub fn home(state: &StorefrontState) {
    println!("Featured picks");
    render_cards(&state.home(), state);
}

/// Render the shop page for the given selections.
pub fn shop(state: &StorefrontState, request: &ShopRequest) {
    println!(
        "Shop - category: {}, search: {:?}, sort: {}",
        request.category.as_str(),
        request.search,
        request.sort.as_str()
    );
    let cards = state.shop(request);
    if cards.is_empty() {
        println!("No products match.");
        return;
    }
    render_cards(&cards, state);
}

/// Render the deals page.
pub fn deals(state: &StorefrontState) {
    println!("Today's deals");
    render_cards(&state.deals(), state);
}

fn render_cards(cards: &[ProductCard<'_>], state: &StorefrontState) {
    for card in cards {
        let product = card.product;
        let heart = if card.in_wishlist { "\u{2665}" } else { "\u{2661}" };
        let deal = if product.deal { "  \u{2022} Deal" } else { "" };
        println!(
            "  {:<4} {:<24} {:>8}  {heart}{deal}",
            product.id,
            product.name,
            product.price.display()
        );
    }
    println!("Cart: {} item(s)", state.cart().count());
}
