//! Command implementations for the Nightmarket CLI.

pub mod account;
pub mod cart;
pub mod shop;
pub mod wishlist;
