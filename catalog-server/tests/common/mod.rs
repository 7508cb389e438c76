//! Shared helpers for catalog-server integration tests

#![allow(dead_code)]

use catalog_server::{Config, ServerState};
use shared::{Product, ProductInput};
use tempfile::TempDir;

/// A server state backed by a fresh on-disk database
///
/// Keep the returned `TempDir` alive for as long as the state is used.
pub async fn test_state() -> (TempDir, ServerState) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (tmp, state)
}

pub fn input(name: &str, main_category: &str) -> ProductInput {
    ProductInput::new(name, "₦10,000")
        .with_category(format!("{main_category} > misc"))
        .with_main_category(main_category)
}

/// Create `names` in order, each under the given main category
pub async fn seed(state: &ServerState, items: &[(&str, &str)]) -> Vec<Product> {
    let mut created = Vec::with_capacity(items.len());
    for (name, category) in items {
        created.push(state.products().create(input(name, category)).await.unwrap());
    }
    created
}
