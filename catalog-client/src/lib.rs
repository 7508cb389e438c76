//! Catalog Client - HTTP client and browsing state for the catalog server
//!
//! - [`http`]: the [`ProductApi`] seam and its reqwest implementation
//! - [`catalog`]: client-side state, category filter and pagination
//! - [`transfer`]: bulk JSON import/export

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod transfer;

pub use catalog::{CatalogState, Notice, NoticeLevel, PageButton, PageControls, Pagination};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpProductClient, ProductApi};
pub use transfer::{
    ImportFailure, ImportReport, export_file_name, export_notice, export_products, import_products,
};

// Re-export shared types for convenience
pub use shared::{CategoryFilter, ListQuery, Product, ProductInput, ProductList};
