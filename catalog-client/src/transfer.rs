//! Bulk JSON import and export of products
//!
//! Export writes the full product list as pretty JSON. Import reads a JSON
//! array and creates every item independently; ids in the file are ignored
//! and the server assigns new ones.

use chrono::NaiveDate;
use serde_json::Value;
use shared::{Product, ProductInput};

use crate::catalog::Notice;
use crate::http::ProductApi;
use crate::{ClientError, ClientResult};

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub total: usize,
    pub failures: Vec<ImportFailure>,
}

/// An item the server did not accept
#[derive(Debug, Clone, PartialEq)]
pub struct ImportFailure {
    /// Position in the imported array
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

impl ImportReport {
    pub fn notice(&self) -> Notice {
        Notice::success(format!(
            "Imported {} out of {} products successfully!",
            self.imported, self.total
        ))
    }
}

/// Parse an import file into create payloads
///
/// The file must be a JSON array. Items that are not product objects are
/// kept as `Err` so they are counted in the report.
pub fn parse_import(json: &str) -> ClientResult<Vec<Result<ProductInput, String>>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ClientError::InvalidImport(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ClientError::InvalidImport("expected a JSON array".into()));
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value::<ProductInput>(item).map_err(|e| e.to_string()))
        .collect())
}

/// Create every product in `json`, continuing past failures
pub async fn import_products<A>(api: &A, json: &str) -> ClientResult<ImportReport>
where
    A: ProductApi + ?Sized,
{
    let items = parse_import(json)?;
    let mut report = ImportReport {
        total: items.len(),
        ..Default::default()
    };

    for (index, item) in items.into_iter().enumerate() {
        let input = match item {
            Ok(input) => input,
            Err(reason) => {
                report.failures.push(ImportFailure {
                    index,
                    name: None,
                    reason,
                });
                continue;
            }
        };

        match api.create_product(&input).await {
            Ok(product) => {
                tracing::debug!(index, id = product.id, "Imported product");
                report.imported += 1;
            }
            Err(e) => {
                tracing::warn!(index, name = ?input.name, error = %e, "Import item rejected");
                report.failures.push(ImportFailure {
                    index,
                    name: input.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        imported = report.imported,
        total = report.total,
        "Product import finished"
    );
    Ok(report)
}

/// Pretty-printed JSON array of `products`
///
/// An empty catalog is not exported; the caller gets a warning to show.
pub fn export_products(products: &[Product]) -> Result<String, Notice> {
    if products.is_empty() {
        return Err(Notice::warning("No products to export."));
    }
    serde_json::to_string_pretty(products).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize products for export");
        Notice::error("Failed to export products.")
    })
}

pub fn export_notice(count: usize) -> Notice {
    Notice::success(format!("Exported {count} products successfully!"))
}

/// `products-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("products-{}.json", date.format("%Y-%m-%d"))
}
