//! Persistent key-value store backed by one JSON file per key.
//!
//! This is the durable, origin-scoped storage the cart, wishlist, and
//! display mode are flushed through. Each key is an independent register;
//! there are no transactions across keys.
//!
//! The adapter is fail-soft in both directions:
//! - [`JsonStore::load`] returns the caller's fallback on a missing file,
//!   an unreadable file, or JSON that does not match the expected shape.
//!   Deserializing into the typed value is the schema validation - stored
//!   blobs are never trusted implicitly.
//! - [`JsonStore::save`] logs write failures (e.g., disk full) and
//!   swallows them. In-memory state stays correct for the session.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Persistence key names.
pub mod keys {
    /// Ordered cart lines.
    pub const CART: &str = "nm_cart";
    /// Wishlist products, id-unique, in insertion order.
    pub const WISHLIST: &str = "nm_wishlist";
    /// Display mode, `"light"` or `"dark"`.
    pub const MODE: &str = "nm_mode";
    /// Registered user's name, written by the signup collaborator.
    pub const USER_NAME: &str = "nm_user_name";
    /// Registered user's email, written by the signup collaborator.
    pub const USER_EMAIL: &str = "nm_user_email";
}

/// Errors internal to the store. Never surfaced to state callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A JSON file-per-key store rooted at one directory.
///
/// Cloning is cheap; clones share the same root and therefore the same
/// persisted registers.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Load the value stored under `key`, or `fallback` if the key is
    /// missing, unreadable, or does not deserialize into `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.load_opt(key).unwrap_or(fallback)
    }

    /// Load the value stored under `key`, or `None` if absent or corrupt.
    pub fn load_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match self.try_load(key) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding corrupt stored value");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// Fire-and-forget: failures are logged, not returned.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            tracing::warn!(key, error = %err, "failed to persist value");
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let bytes = fs::read(self.path_for(key))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // Write to a sibling temp file and rename it into place, so a crash
    // mid-write never leaves a truncated register behind.
    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_key_returns_fallback() {
        let (_dir, store) = temp_store();
        let value: Vec<String> = store.load("absent", vec!["fallback".to_owned()]);
        assert_eq!(value, vec!["fallback".to_owned()]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        store.save("list", &vec![1u32, 2, 3]);
        let value: Vec<u32> = store.load("list", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn corrupt_json_returns_fallback() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("bad.json"), b"{not json").unwrap();
        let value: Vec<u32> = store.load("bad", vec![9]);
        assert_eq!(value, vec![9]);
    }

    #[test]
    fn shape_mismatch_returns_fallback() {
        let (_dir, store) = temp_store();
        store.save("shape", &"a plain string");
        let value: Vec<u32> = store.load("shape", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn keys_are_independent_registers() {
        let (dir, store) = temp_store();
        store.save("a", &1u32);
        store.save("b", &2u32);
        fs::write(dir.path().join("a.json"), b"garbage").unwrap();
        assert_eq!(store.load_opt::<u32>("a"), None);
        assert_eq!(store.load("b", 0u32), 2);
    }
}
