//! Display mode preference and user registration.

use nightmarket_storefront::StorefrontState;

/// Show the current display mode.
pub fn show_mode(state: &StorefrontState) {
    println!("Display mode: {}", state.prefs().mode());
}

/// Flip between light and dark.
pub fn toggle_mode(state: &mut StorefrontState) {
    let mode = state.prefs_mut().toggle_mode();
    println!("Display mode: {mode}");
}

/// Store a registration, the way the signup modal does.
///
/// The storefront core does not validate these fields; the signup form
/// owns validation.
pub fn register(state: &StorefrontState, name: &str, email: &str) {
    state.profile().register(name, email);
    if let Some(user) = state.profile().registered() {
        println!(
            "Welcome, {}! Your account has been created.",
            user.first_name()
        );
    }
}
