//! Category filter over the loaded product set
//!
//! Works on indices so the filtered view can never hold a product that is
//! not in the full set.

use shared::{CategoryFilter, Product};

/// Indices of the products matching `filter`, in their original order
pub fn filter_indices(products: &[Product], filter: &CategoryFilter) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(i, _)| i)
        .collect()
}

/// The matching products themselves
pub fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductInput;

    fn catalog() -> Vec<Product> {
        [
            ("Phone", "Electronics"),
            ("Sofa", "Home"),
            ("Laptop", "electronics"),
            ("Dress", "Fashion"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, category))| {
            ProductInput::new(name, "₦1")
                .with_main_category(category)
                .into_draft()
                .unwrap()
                .with_id(i as i64 + 1)
        })
        .collect()
    }

    #[test]
    fn test_all_is_identity() {
        let products = catalog();
        assert_eq!(
            filter_indices(&products, &CategoryFilter::All),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_match_is_case_insensitive_and_order_preserving() {
        let products = catalog();
        let filter = CategoryFilter::parse("ELECTRONICS");
        assert_eq!(filter_indices(&products, &filter), vec![0, 2]);

        let names: Vec<&str> = filter_products(&products, &filter)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Phone", "Laptop"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = catalog();
        let filter = CategoryFilter::parse("home");
        let once: Vec<Product> = filter_products(&products, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, &filter);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice[0], &once[0]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_indices(&catalog(), &CategoryFilter::parse("Toys")).is_empty());
    }
}
