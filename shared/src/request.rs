//! List query parameters
//!
//! `page`, `limit` and `category` arrive as raw strings and are parsed
//! leniently: anything unparseable falls back to the default instead of
//! rejecting the request.

use serde::{Deserialize, Serialize};

use crate::models::CategoryFilter;

/// `GET /api/products?page=&limit=&category=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ListQuery {
    /// Every product, unpaginated
    pub fn all() -> Self {
        Self::default()
    }

    pub fn paged(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
            category: None,
        }
    }

    pub fn with_category(mut self, category: &CategoryFilter) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Requested page, at least 1
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p > 0)
            .map_or(1, |p| p as u64)
    }

    /// Page size; `None` means "return every match"
    pub fn limit(&self) -> Option<u64> {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .map(|l| l as u64)
    }

    pub fn category(&self) -> CategoryFilter {
        CategoryFilter::from_option(self.category.as_deref())
    }
}
