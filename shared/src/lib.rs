//! Shared types for the storefront catalog
//!
//! Wire types used by both the catalog server and its clients:
//! product records, create/update payloads, list queries and responses,
//! and the error body returned by every failing endpoint.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use error::ErrorBody;
pub use models::{CategoryFilter, InputError, Product, ProductDraft, ProductInput};
pub use request::ListQuery;
pub use response::{DeleteResponse, ProductList};
pub use serde::{Deserialize, Serialize};
