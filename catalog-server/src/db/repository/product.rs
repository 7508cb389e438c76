//! Product Repository

use std::sync::Arc;

use shared::{CategoryFilter, Product, ProductDraft, ProductInput, ProductList};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use super::{BaseRepository, RepoError, RepoResult};

const PRODUCT_TABLE: &str = "product";

/// Projection shared by every read: the numeric record key comes back as `id`
const PRODUCT_FIELDS: &str = "record::id(id) AS id, name, price, originalPrice, discount, \
     description, image, category, mainCategory, rating, ratingCount, purchases, delivery, soldOut";

// =============================================================================
// Product Repository
// =============================================================================

/// Product store
///
/// Clones share one create lock, so id allocation (read max, insert max+1)
/// is serialized across every request holding this repository.
#[derive(Clone, Debug)]
pub struct ProductRepository {
    base: BaseRepository,
    create_lock: Arc<Mutex<()>>,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Find every product matching `filter`, ordered by id
    pub async fn find_all(&self, filter: &CategoryFilter) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = match filter.normalized() {
            None => {
                let sql = format!("SELECT {PRODUCT_FIELDS} FROM product ORDER BY id ASC");
                self.base.db().query(&sql).await?.take(0)?
            }
            Some(category) => {
                let sql = format!(
                    "SELECT {PRODUCT_FIELDS} FROM product \
                     WHERE string::lowercase(mainCategory) = $category ORDER BY id ASC"
                );
                self.base
                    .db()
                    .query(&sql)
                    .bind(("category", category))
                    .await?
                    .take(0)?
            }
        };
        Ok(products)
    }

    /// List products, optionally filtered and paged
    ///
    /// Paging happens on the fetched, id-ordered matches: the embedded engine
    /// has dropped rows on `WHERE ... ORDER BY ... LIMIT`.
    pub async fn list(
        &self,
        filter: &CategoryFilter,
        page: u64,
        limit: Option<u64>,
    ) -> RepoResult<ProductList> {
        let matches = self.find_all(filter).await?;
        tracing::debug!(
            category = %filter,
            page,
            limit = ?limit,
            matches = matches.len(),
            "Listing products"
        );
        Ok(ProductList::paginate(matches, page, limit))
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_FIELDS} FROM type::thing($table, $id)");
        let products: Vec<Product> = self
            .base
            .db()
            .query(&sql)
            .bind(("table", PRODUCT_TABLE))
            .bind(("id", id))
            .await?
            .take(0)?;
        Ok(products.into_iter().next())
    }

    /// Find product by id, failing with NotFound
    pub async fn get(&self, id: i64) -> RepoResult<Product> {
        self.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Highest id in the table plus one, or 1 when empty
    async fn next_id(&self) -> RepoResult<i64> {
        let ids: Vec<i64> = self
            .base
            .db()
            .query("SELECT VALUE record::id(id) FROM product")
            .await?
            .take(0)?;
        Ok(ids.into_iter().max().map_or(1, |max| max + 1))
    }

    /// Create a new product with the next free id
    pub async fn create(&self, input: ProductInput) -> RepoResult<Product> {
        let draft = into_draft(input)?;

        let _guard = self.create_lock.lock().await;
        let id = self.next_id().await?;
        self.insert(id, draft).await
    }

    /// Store `draft` under an explicit id
    ///
    /// Fails with Duplicate when a product with that id already exists.
    pub async fn insert(&self, id: i64, draft: ProductDraft) -> RepoResult<Product> {
        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", PRODUCT_TABLE))
            .bind(("id", id))
            .bind(("data", draft.clone()))
            .await?
            .check()
            .map_err(|e| classify_write_error(id, e))?;

        tracing::info!(id, name = %draft.name, "Product created");
        Ok(draft.with_id(id))
    }

    /// Replace every mutable field of a product
    pub async fn update(&self, id: i64, input: ProductInput) -> RepoResult<Product> {
        let draft = into_draft(input)?;

        let sql = format!(
            "UPDATE type::thing($table, $id) CONTENT $data RETURN NONE;
             SELECT {PRODUCT_FIELDS} FROM type::thing($table, $id);"
        );
        let mut response = self
            .base
            .db()
            .query(&sql)
            .bind(("table", PRODUCT_TABLE))
            .bind(("id", id))
            .bind(("data", draft))
            .await?
            .check()?;

        let updated: Vec<Product> = response.take(1)?;
        let product = updated.into_iter().next().ok_or_else(|| not_found(id))?;

        tracing::info!(id, "Product updated");
        Ok(product)
    }

    /// Flip the sold-out flag
    pub async fn toggle_sold_out(&self, id: i64) -> RepoResult<Product> {
        let sql = format!(
            "UPDATE type::thing($table, $id) SET soldOut = !soldOut RETURN NONE;
             SELECT {PRODUCT_FIELDS} FROM type::thing($table, $id);"
        );
        let mut response = self
            .base
            .db()
            .query(&sql)
            .bind(("table", PRODUCT_TABLE))
            .bind(("id", id))
            .await?
            .check()?;

        let updated: Vec<Product> = response.take(1)?;
        let product = updated.into_iter().next().ok_or_else(|| not_found(id))?;

        tracing::info!(id, sold_out = product.sold_out, "Product sold-out toggled");
        Ok(product)
    }

    /// Delete a product, returning what was removed
    pub async fn delete(&self, id: i64) -> RepoResult<Product> {
        let sql = format!(
            "SELECT {PRODUCT_FIELDS} FROM type::thing($table, $id);
             DELETE type::thing($table, $id) RETURN NONE;"
        );
        let mut response = self
            .base
            .db()
            .query(&sql)
            .bind(("table", PRODUCT_TABLE))
            .bind(("id", id))
            .await?
            .check()?;

        let removed: Vec<Product> = response.take(0)?;
        let product = removed.into_iter().next().ok_or_else(|| not_found(id))?;

        tracing::info!(id, "Product deleted");
        Ok(product)
    }
}

fn into_draft(input: ProductInput) -> RepoResult<ProductDraft> {
    input
        .into_draft()
        .map_err(|e| RepoError::Validation(e.to_string()))
}

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(format!("Product {id} not found"))
}

/// Map a failed write to Duplicate when the record already exists
fn classify_write_error(id: i64, err: surrealdb::Error) -> RepoError {
    let message = err.to_string();
    if is_record_exists(&message) {
        tracing::warn!(id, "Product id collision on create");
        RepoError::Duplicate(format!("Product with id {id} already exists"))
    } else {
        RepoError::Database(message)
    }
}

fn is_record_exists(message: &str) -> bool {
    message.contains("already exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_exists_detection() {
        assert!(is_record_exists(
            "Database record `product:3` already exists"
        ));
        assert!(!is_record_exists("The query was not executed"));
    }

    #[test]
    fn test_projection_renames_record_key() {
        assert!(PRODUCT_FIELDS.starts_with("record::id(id) AS id"));
        assert!(PRODUCT_FIELDS.contains("mainCategory"));
        assert!(PRODUCT_FIELDS.contains("soldOut"));
    }
}
