//! API Response types

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Paged product listing
///
/// ```json
/// { "products": [...], "total": 23, "page": 2, "totalPages": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub products: Vec<Product>,
    /// Number of matches before paging
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl ProductList {
    /// Page an id-ordered list of matches
    ///
    /// With a positive `limit`, keeps `[(page-1)*limit, page*limit)` and
    /// reports `ceil(total/limit)` pages; without one, keeps everything as a
    /// single page.
    pub fn paginate(matches: Vec<Product>, page: u64, limit: Option<u64>) -> Self {
        let total = matches.len() as u64;
        let page = page.max(1);

        match limit.filter(|l| *l > 0) {
            Some(limit) => {
                let skip = (page - 1).saturating_mul(limit);
                let products = matches
                    .into_iter()
                    .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                    .take(usize::try_from(limit).unwrap_or(usize::MAX))
                    .collect();
                Self {
                    products,
                    total,
                    page,
                    total_pages: total.div_ceil(limit),
                }
            }
            None => Self {
                products: matches,
                total,
                page,
                total_pages: 1,
            },
        }
    }

    /// Wrap a bare product array as a single page
    pub fn single_page(products: Vec<Product>) -> Self {
        Self::paginate(products, 1, None)
    }
}

/// `DELETE /api/products/{id}` confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;

    fn products(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|id| {
                ProductInput::new(format!("Item {id}"), "₦1")
                    .into_draft()
                    .unwrap()
                    .with_id(id)
            })
            .collect()
    }

    #[test]
    fn test_unpaged_is_single_page() {
        let list = ProductList::paginate(products(5), 1, None);
        assert_eq!(list.total, 5);
        assert_eq!(list.total_pages, 1);
        assert_eq!(list.products.len(), 5);
    }

    #[test]
    fn test_paged_window() {
        let list = ProductList::paginate(products(23), 3, Some(10));
        assert_eq!(list.total, 23);
        assert_eq!(list.page, 3);
        assert_eq!(list.total_pages, 3);
        let ids: Vec<i64> = list.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let list = ProductList::paginate(products(4), 9, Some(2));
        assert!(list.products.is_empty());
        assert_eq!(list.total, 4);
        assert_eq!(list.total_pages, 2);
    }

    #[test]
    fn test_empty_store_has_no_pages_when_paged() {
        let list = ProductList::paginate(Vec::new(), 1, Some(8));
        assert_eq!(list.total_pages, 0);
        assert_eq!(ProductList::single_page(Vec::new()).total_pages, 1);
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(ProductList::single_page(products(1))).unwrap();
        assert_eq!(value["totalPages"], 1);
        assert_eq!(value["total"], 1);
        assert_eq!(value["products"][0]["id"], 1);
    }
}
