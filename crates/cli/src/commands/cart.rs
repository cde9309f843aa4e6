//! Cart page and cart mutations.

use nightmarket_core::ProductId;
use nightmarket_storefront::{StorefrontError, StorefrontState};

/// Render the cart page: lines with positions, entry ids, and the total.
pub fn list(state: &StorefrontState) {
    let view = state.cart_view();
    if view.lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in &view.lines {
        println!(
            "  [{}] {:<4} {:<24} {:>8}  entry {}",
            line.index,
            line.product.id,
            line.product.name,
            line.product.price.display(),
            line.entry
        );
    }
    println!("Total: {}  ({} item(s))", view.total.display(), view.count);
}

/// Add a product to the cart by id.
pub fn add(state: &mut StorefrontState, id: &str) -> Result<(), StorefrontError> {
    let id = ProductId::from(id);
    state.add_to_cart(&id)?;
    println!("Added {id} to cart. Cart: {} item(s)", state.cart().count());
    Ok(())
}

/// Remove the cart line at a position.
pub fn remove_at(state: &mut StorefrontState, index: usize) -> Result<(), StorefrontError> {
    let removed = state.remove_from_cart(index)?;
    println!(
        "Removed {}. Cart: {} item(s)",
        removed.name,
        state.cart().count()
    );
    Ok(())
}

/// Remove a cart line by the stable entry id shown in `cart list`.
pub fn remove(state: &mut StorefrontState, entry: &str) -> Result<(), Box<dyn std::error::Error>> {
    let entry_id = state
        .cart()
        .lines()
        .iter()
        .map(|line| line.entry)
        .find(|id| id.to_string() == entry)
        .ok_or_else(|| format!("no cart entry {entry}"))?;
    let removed = state.cart_mut().remove(entry_id)?;
    println!(
        "Removed {}. Cart: {} item(s)",
        removed.name,
        state.cart().count()
    );
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &mut StorefrontState) {
    state.clear_cart();
    println!("Cart cleared.");
}

/// Simulated checkout.
pub fn checkout(state: &mut StorefrontState) -> Result<(), StorefrontError> {
    let receipt = state.checkout()?;
    println!(
        "Checkout simulated - charged {} for {} item(s). This is a front-end demo.",
        receipt.total.display(),
        receipt.items
    );
    Ok(())
}
