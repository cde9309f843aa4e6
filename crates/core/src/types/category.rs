//! Product categories and the category filter sentinel.

use serde::{Deserialize, Serialize};

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
}

impl Category {
    /// Parse a category from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "electronics" => Some(Self::Electronics),
            "fashion" => Some(Self::Fashion),
            "home" => Some(Self::Home),
            "beauty" => Some(Self::Beauty),
            _ => None,
        }
    }

    /// The lowercase name used in URLs and persisted JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::Home => "home",
            Self::Beauty => "beauty",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category selection: either a single category or the "all" sentinel.
///
/// Unknown selector strings (e.g., from a hand-edited URL) fall back to
/// [`CategoryFilter::All`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every product.
    #[default]
    All,
    /// Match products in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse from a URL or form parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Category::parse(s).map_or(Self::All, Self::Only)
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    /// Convert to the URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_str(),
        }
    }
}
