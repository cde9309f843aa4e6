//! Sort keys for product listings.

use serde::{Deserialize, Serialize};

/// Sort order for a product listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first, catalog order within each group.
    #[default]
    Featured,
    /// Price ascending, catalog order on ties.
    PriceAsc,
    /// Price descending, catalog order on ties.
    PriceDesc,
}

impl SortKey {
    /// Parse from a URL parameter value. Unknown values sort by featured.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            _ => Self::Featured,
        }
    }

    /// Convert to the URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}
