//! Integration test helpers for Nightmarket.
//!
//! Each test builds an isolated [`StorefrontState`] over a temporary
//! store directory, so tests never share persisted state and can be run
//! in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use nightmarket_storefront::{Catalog, JsonStore, StorefrontState};
use tempfile::TempDir;

/// Build a storefront session over a fresh temporary store directory.
///
/// Keep the returned [`TempDir`] alive for the duration of the test; the
/// directory is removed when it drops.
///
/// # Panics
///
/// Panics if the temporary directory or store cannot be created.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn temp_state() -> (TempDir, StorefrontState) {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);
    (dir, state)
}

/// Build a storefront session over an existing store directory.
///
/// Loading twice from the same directory models a page reload.
///
/// # Panics
///
/// Panics if the store cannot be opened.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn state_in(dir: &TempDir) -> StorefrontState {
    let store = JsonStore::open(dir.path()).unwrap();
    StorefrontState::with_catalog(Catalog::seed(), &store)
}
