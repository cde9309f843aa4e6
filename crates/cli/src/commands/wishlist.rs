//! Wishlist page and wishlist mutations.

use nightmarket_core::ProductId;
use nightmarket_storefront::{StorefrontError, StorefrontState};

/// Render the wishlisted products.
pub fn list(state: &StorefrontState) {
    let wishlist = state.wishlist();
    if wishlist.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }
    for product in wishlist.products() {
        println!(
            "  {:<4} {:<24} {:>8}",
            product.id,
            product.name,
            product.price.display()
        );
    }
    println!("{} product(s) wishlisted", wishlist.len());
}

/// Toggle wishlist membership for a product id.
pub fn toggle(state: &mut StorefrontState, id: &str) -> Result<(), StorefrontError> {
    let id = ProductId::from(id);
    if state.toggle_wishlist(&id)? {
        println!("Added {id} to wishlist \u{2665}");
    } else {
        println!("Removed {id} from wishlist \u{2661}");
    }
    Ok(())
}
