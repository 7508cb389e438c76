//! Path parameter conversion helpers

use crate::utils::{AppError, AppResult};

/// Parse the `{id}` path segment into a product id
pub fn parse_product_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid product id: {raw}")))
}
