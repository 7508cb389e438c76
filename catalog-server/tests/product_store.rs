//! ProductRepository behaviour against an embedded database

mod common;

use catalog_server::AppError;
use catalog_server::db::repository::RepoError;
use common::{input, seed, test_state};
use shared::models::product::{
    DEFAULT_DELIVERY, DEFAULT_PURCHASES, DEFAULT_RATING, DEFAULT_RATING_COUNT, PLACEHOLDER_IMAGE,
};
use shared::{CategoryFilter, ProductInput};

#[tokio::test]
async fn create_then_get_returns_same_product() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();

    let created = repo
        .create(input("Wireless Headphones", "Electronics"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_applies_defaults() {
    let (_tmp, state) = test_state().await;

    let product = state
        .products()
        .create(ProductInput::new("Desk Lamp", "₦8,500").with_category("Home"))
        .await
        .unwrap();

    assert_eq!(product.main_category, "Home");
    assert_eq!(product.image, PLACEHOLDER_IMAGE);
    assert_eq!(product.rating, DEFAULT_RATING);
    assert_eq!(product.rating_count, DEFAULT_RATING_COUNT);
    assert_eq!(product.purchases, DEFAULT_PURCHASES);
    assert_eq!(product.delivery, DEFAULT_DELIVERY);
    assert!(!product.sold_out);
}

#[tokio::test]
async fn create_rejects_missing_price() {
    let (_tmp, state) = test_state().await;

    let payload = ProductInput {
        name: Some("No price".into()),
        ..Default::default()
    };
    let err = state.products().create(payload).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let all = state.products().find_all(&CategoryFilter::All).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();
    let created = seed(&state, &[("Kettle", "Home")]).await;

    let removed = repo.delete(created[0].id).await.unwrap();
    assert_eq!(removed.id, created[0].id);

    assert!(matches!(
        repo.get(created[0].id).await,
        Err(RepoError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete(created[0].id).await,
        Err(RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn toggle_twice_restores_sold_out() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();
    let created = seed(&state, &[("Blender", "Home")]).await;
    let id = created[0].id;

    let once = repo.toggle_sold_out(id).await.unwrap();
    assert!(once.sold_out);

    let twice = repo.toggle_sold_out(id).await.unwrap();
    assert!(!twice.sold_out);
    assert_eq!(twice, created[0]);

    assert!(matches!(
        repo.toggle_sold_out(999).await,
        Err(RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn ids_are_max_plus_one_without_reuse() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();
    let created = seed(&state, &[("A", "Home"), ("B", "Home"), ("C", "Home")]).await;
    let ids: Vec<i64> = created.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Deleting a non-max product does not free its id
    repo.delete(2).await.unwrap();
    let next = repo.create(input("D", "Home")).await.unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
async fn insert_on_taken_id_is_duplicate() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();
    let existing = seed(&state, &[("Kettle", "Home")]).await;

    let draft = input("Impostor", "Home").into_draft().unwrap();
    let err = repo.insert(existing[0].id, draft).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");

    // The original record is untouched
    assert_eq!(repo.get(existing[0].id).await.unwrap(), existing[0]);

    let app_err: AppError = err.into();
    assert_eq!(app_err.status(), http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn insert_on_free_id_succeeds() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();

    let draft = input("Kettle", "Home").into_draft().unwrap();
    let stored = repo.insert(10, draft).await.unwrap();
    assert_eq!(stored.id, 10);

    let next = repo.create(input("Toaster", "Home")).await.unwrap();
    assert_eq!(next.id, 11);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let (_tmp, state) = test_state().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = state.products().clone();
        handles.push(tokio::spawn(async move {
            repo.create(input(&format!("Item {i}"), "Home")).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}

#[tokio::test]
async fn category_filter_is_case_insensitive_and_sorted() {
    let (_tmp, state) = test_state().await;
    seed(
        &state,
        &[
            ("Phone", "Electronics"),
            ("Sofa", "Home"),
            ("Laptop", "electronics"),
            ("Charger", "ELECTRONICS"),
        ],
    )
    .await;

    let found = state
        .products()
        .find_all(&CategoryFilter::parse("Electronics"))
        .await
        .unwrap();
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Phone", "Laptop", "Charger"]);

    // Whole-key match only, no substring matching
    let partial = state
        .products()
        .find_all(&CategoryFilter::parse("electro"))
        .await
        .unwrap();
    assert!(partial.is_empty());

    let all = state
        .products()
        .find_all(&CategoryFilter::parse("all"))
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn list_reports_totals_across_pages() {
    let (_tmp, state) = test_state().await;
    let items: Vec<(String, &str)> = (1..=23).map(|i| (format!("Item {i}"), "Home")).collect();
    let items: Vec<(&str, &str)> = items.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    seed(&state, &items).await;

    let page = state
        .products()
        .list(&CategoryFilter::All, 3, Some(10))
        .await
        .unwrap();
    assert_eq!(page.total, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    let ids: Vec<i64> = page.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![21, 22, 23]);

    let unpaged = state
        .products()
        .list(&CategoryFilter::All, 1, None)
        .await
        .unwrap();
    assert_eq!(unpaged.products.len(), 23);
    assert_eq!(unpaged.total_pages, 1);

    let beyond = state
        .products()
        .list(&CategoryFilter::All, 9, Some(10))
        .await
        .unwrap();
    assert!(beyond.products.is_empty());
    assert_eq!(beyond.total, 23);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let (_tmp, state) = test_state().await;
    let repo = state.products();
    let created = seed(&state, &[("Old name", "Home")]).await;

    let updated = repo
        .update(
            created[0].id,
            ProductInput::new("New name", "₦2,000")
                .with_category("Fashion")
                .with_sold_out(true),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created[0].id);
    assert_eq!(updated.name, "New name");
    assert_eq!(updated.main_category, "Fashion");
    assert!(updated.sold_out);
    assert_eq!(repo.get(created[0].id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let (_tmp, state) = test_state().await;

    let err = state
        .products()
        .update(42, input("Ghost", "Home"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // UPDATE must not create the record
    assert!(state.products().find_by_id(42).await.unwrap().is_none());
}
