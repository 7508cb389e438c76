//! Product Model
//!
//! Three shapes of the same record:
//!
//! | Type | Where | Notes |
//! |------|-------|-------|
//! | [`ProductInput`] | request body (create/update, import) | every field optional |
//! | [`ProductDraft`] | stored document | validated, fully defaulted, no id |
//! | [`Product`] | responses | draft plus the store-assigned id |
//!
//! Defaults are applied exactly once, in [`ProductInput::into_draft`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image used when a product is submitted without one
pub const PLACEHOLDER_IMAGE: &str = "https://files.catbox.moe/da5lzg.png";
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_RATING_COUNT: &str = "1K";
pub const DEFAULT_PURCHASES: &str = "New product";
pub const DEFAULT_DELIVERY: &str = "FREE delivery within 3-5 days";
pub const MAX_RATING: f64 = 5.0;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store, immutable
    pub id: i64,
    pub name: String,
    /// Display string, never parsed (e.g. "₦15,000")
    pub price: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub discount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// Filter key for category browsing
    #[serde(default)]
    pub main_category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: String,
    #[serde(default)]
    pub purchases: String,
    #[serde(default)]
    pub delivery: String,
    #[serde(default)]
    pub sold_out: bool,
}

/// Validated product document without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub original_price: String,
    pub discount: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub main_category: String,
    pub rating: f64,
    pub rating_count: String,
    pub purchases: String,
    pub delivery: String,
    pub sold_out: bool,
}

impl ProductDraft {
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            discount: self.discount,
            description: self.description,
            image: self.image,
            category: self.category,
            main_category: self.main_category,
            rating: self.rating,
            rating_count: self.rating_count,
            purchases: self.purchases,
            delivery: self.delivery,
            sold_out: self.sold_out,
        }
    }
}

/// Create / update payload
///
/// Unknown keys (including `id`) are ignored, so exported products can be
/// fed straight back in as imports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchases: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_out: Option<bool>,
}

/// Product payload rejected before it reaches the store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(f64),
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_main_category(mut self, main_category: impl Into<String>) -> Self {
        self.main_category = Some(main_category.into());
        self
    }

    pub fn with_sold_out(mut self, sold_out: bool) -> Self {
        self.sold_out = Some(sold_out);
        self
    }

    /// Validate and fill in every default
    ///
    /// - `name` and `price` must be non-blank
    /// - blank `image` falls back to [`PLACEHOLDER_IMAGE`]
    /// - blank `mainCategory` falls back to `category`
    /// - `rating` must lie in `0..=5`
    pub fn into_draft(self) -> Result<ProductDraft, InputError> {
        let name = required(self.name, "name")?;
        let price = required(self.price, "price")?;

        let rating = self.rating.unwrap_or(DEFAULT_RATING);
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(InputError::RatingOutOfRange(rating));
        }

        let category = self.category.unwrap_or_default();
        let main_category = non_blank(self.main_category).unwrap_or_else(|| category.clone());

        Ok(ProductDraft {
            name,
            price,
            original_price: self.original_price.unwrap_or_default(),
            discount: self.discount.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: non_blank(self.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category,
            main_category,
            rating,
            rating_count: self
                .rating_count
                .unwrap_or_else(|| DEFAULT_RATING_COUNT.to_string()),
            purchases: self
                .purchases
                .unwrap_or_else(|| DEFAULT_PURCHASES.to_string()),
            delivery: self.delivery.unwrap_or_else(|| DEFAULT_DELIVERY.to_string()),
            sold_out: self.sold_out.unwrap_or(false),
        })
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            price: Some(product.price.clone()),
            original_price: Some(product.original_price.clone()),
            discount: Some(product.discount.clone()),
            description: Some(product.description.clone()),
            image: Some(product.image.clone()),
            category: Some(product.category.clone()),
            main_category: Some(product.main_category.clone()),
            rating: Some(product.rating),
            rating_count: Some(product.rating_count.clone()),
            purchases: Some(product.purchases.clone()),
            delivery: Some(product.delivery.clone()),
            sold_out: Some(product.sold_out),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, InputError> {
    non_blank(value).ok_or(InputError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_input_gets_defaults() {
        let draft = ProductInput::new("Hand Bag", "₦15,000")
            .with_category("bags")
            .into_draft()
            .unwrap();

        assert_eq!(draft.image, PLACEHOLDER_IMAGE);
        assert_eq!(draft.main_category, "bags");
        assert_eq!(draft.rating, DEFAULT_RATING);
        assert_eq!(draft.rating_count, DEFAULT_RATING_COUNT);
        assert_eq!(draft.purchases, DEFAULT_PURCHASES);
        assert_eq!(draft.delivery, DEFAULT_DELIVERY);
        assert_eq!(draft.original_price, "");
        assert!(!draft.sold_out);
    }

    #[test]
    fn test_explicit_main_category_wins() {
        let draft = ProductInput::new("Sneaker", "₦9,000")
            .with_category("shoes-men")
            .with_main_category("shoes")
            .into_draft()
            .unwrap();
        assert_eq!(draft.category, "shoes-men");
        assert_eq!(draft.main_category, "shoes");
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        let mut input = ProductInput::new("Bag", "₦1");
        input.image = Some("   ".to_string());
        assert_eq!(input.into_draft().unwrap().image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_missing_required_fields() {
        let no_name = ProductInput {
            price: Some("₦1".into()),
            ..ProductInput::default()
        };
        assert_eq!(no_name.into_draft(), Err(InputError::MissingField("name")));

        let blank_price = ProductInput::new("Bag", "  ");
        assert_eq!(
            blank_price.into_draft(),
            Err(InputError::MissingField("price"))
        );
    }

    #[test]
    fn test_rating_bounds() {
        let mut input = ProductInput::new("Bag", "₦1");
        input.rating = Some(5.5);
        assert!(matches!(
            input.clone().into_draft(),
            Err(InputError::RatingOutOfRange(_))
        ));

        input.rating = Some(0.0);
        assert_eq!(input.into_draft().unwrap().rating, 0.0);
    }

    #[test]
    fn test_input_ignores_id_key() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Bag",
            "price": "₦1",
            "mainCategory": "bags",
            "soldOut": true
        }))
        .unwrap();

        let product = input.into_draft().unwrap().with_id(7);
        assert_eq!(product.id, 7);
        assert_eq!(product.main_category, "bags");
        assert!(product.sold_out);
    }

    #[test]
    fn test_product_wire_names_are_camel_case() {
        let product = ProductInput::new("Bag", "₦1")
            .with_sold_out(true)
            .into_draft()
            .unwrap()
            .with_id(1);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["soldOut"], true);
        assert_eq!(value["mainCategory"], "");
        assert_eq!(value["ratingCount"], DEFAULT_RATING_COUNT);
    }

    #[test]
    fn test_round_trip_through_input_keeps_fields() {
        let product = ProductInput::new("Bag", "₦1")
            .with_category("bags")
            .into_draft()
            .unwrap()
            .with_id(3);
        let again = ProductInput::from(&product).into_draft().unwrap().with_id(3);
        assert_eq!(product, again);
    }
}
