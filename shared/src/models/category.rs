//! Category filter
//!
//! `"all"` selects every product; any other value selects products whose
//! `mainCategory` matches it ignoring case.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Product;

/// Keyword meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Match on `mainCategory`, case-insensitive
    Main(String),
}

impl CategoryFilter {
    /// Parse a filter key. A missing or blank key means [`CategoryFilter::All`].
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        if key.is_empty() || key.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Main(key.to_string())
        }
    }

    pub fn from_option(key: Option<&str>) -> Self {
        key.map(Self::parse).unwrap_or_default()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Main(category) => product.main_category.to_lowercase() == category.to_lowercase(),
        }
    }

    /// Lowercased key for store-side comparison, `None` for `All`
    pub fn normalized(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Main(category) => Some(category.to_lowercase()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Main(category) => f.write_str(category),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::parse(&key))
    }
}
