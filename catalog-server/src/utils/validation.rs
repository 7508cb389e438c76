//! Input validation helpers
//!
//! Presence and defaulting rules live with the payload type
//! ([`shared::ProductInput::into_draft`]); this module adds the server's
//! text length limits on top.

use shared::ProductInput;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Prices, discounts, categories, rating counts, delivery notes
pub const MAX_SHORT_TEXT_LEN: usize = 200;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

/// Apply every length limit to a product payload
pub fn validate_product_input(input: &ProductInput) -> Result<(), AppError> {
    validate_optional_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&input.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&input.image, "image", MAX_URL_LEN)?;

    for (value, field) in [
        (&input.price, "price"),
        (&input.original_price, "originalPrice"),
        (&input.discount, "discount"),
        (&input.category, "category"),
        (&input.main_category, "mainCategory"),
        (&input.rating_count, "ratingCount"),
        (&input.purchases, "purchases"),
        (&input.delivery, "delivery"),
    ] {
        validate_optional_text(value, field, MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}
