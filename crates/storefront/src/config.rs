//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NM_DATA_DIR` - Directory for the persistent store (default: `.nightmarket`)
//! - `NM_CATALOG_PATH` - JSON product file replacing the built-in catalog

use std::path::PathBuf;

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Root directory of the persistent key-value store.
    pub data_dir: PathBuf,
    /// Optional catalog file overriding the built-in seed.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a usable default, so loading never fails.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default("NM_DATA_DIR", ".nightmarket")),
            catalog_path: get_optional_env("NM_CATALOG_PATH").map(PathBuf::from),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".nightmarket"),
            catalog_path: None,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
