//! Catalog Models

pub mod category;
pub mod product;

// Re-exports
pub use category::CategoryFilter;
pub use product::{InputError, Product, ProductDraft, ProductInput};
