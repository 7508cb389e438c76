//! HTTP client for the product REST API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::{DeleteResponse, ErrorBody, ListQuery, Product, ProductInput, ProductList};

use crate::{ClientConfig, ClientError, ClientResult};

/// Everything the catalog needs from the product store
///
/// [`HttpProductClient`] talks to a running server; tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// GET /api/products
    async fn list_products(&self, query: &ListQuery) -> ClientResult<ProductList>;

    /// GET /api/products/category/{category}
    async fn list_category(
        &self,
        category: &str,
        query: &ListQuery,
    ) -> ClientResult<ProductList>;

    /// GET /api/products/{id}
    async fn get_product(&self, id: i64) -> ClientResult<Product>;

    /// POST /api/products
    async fn create_product(&self, input: &ProductInput) -> ClientResult<Product>;

    /// PUT /api/products/{id}
    async fn update_product(&self, id: i64, input: &ProductInput) -> ClientResult<Product>;

    /// DELETE /api/products/{id}
    async fn delete_product(&self, id: i64) -> ClientResult<()>;

    /// PATCH /api/products/{id}/toggle-soldout
    async fn toggle_sold_out(&self, id: i64) -> ClientResult<Product>;
}

/// List endpoint body: the paged object, or a bare array from older servers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductListPayload {
    Paged(ProductList),
    Bare(Vec<Product>),
}

impl From<ProductListPayload> for ProductList {
    fn from(payload: ProductListPayload) -> Self {
        match payload {
            ProductListPayload::Paged(list) => list,
            ProductListPayload::Bare(products) => ProductList::single_page(products),
        }
    }
}

/// HTTP client for making network requests to the catalog server
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    client: Client,
    base_url: Url,
}

impl HttpProductClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `base_url` + `/api/products` + `segments`, each segment percent-encoded
    fn products_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "products"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        Ok(self.client.request(method, self.products_url(segments)?))
    }

    /// Send the request and decode a successful JSON body
    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(error_from_status(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Map a failing status to a [`ClientError`], preferring the `{error}` message
fn error_from_status(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());
    let message = if message.is_empty() {
        status.to_string()
    } else {
        message
    };

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::BadRequest(message)
        }
        s if s.is_server_error() => ClientError::Server(message),
        s => ClientError::InvalidResponse(format!("unexpected status {s}: {message}")),
    }
}

#[async_trait]
impl ProductApi for HttpProductClient {
    async fn list_products(&self, query: &ListQuery) -> ClientResult<ProductList> {
        let request = self.request(Method::GET, &[])?.query(query);
        let payload: ProductListPayload = Self::send(request).await?;
        Ok(payload.into())
    }

    async fn list_category(
        &self,
        category: &str,
        query: &ListQuery,
    ) -> ClientResult<ProductList> {
        let request = self
            .request(Method::GET, &["category", category])?
            .query(query);
        let payload: ProductListPayload = Self::send(request).await?;
        Ok(payload.into())
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        let id = id.to_string();
        Self::send(self.request(Method::GET, &[id.as_str()])?).await
    }

    async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        Self::send(self.request(Method::POST, &[])?.json(input)).await
    }

    async fn update_product(&self, id: i64, input: &ProductInput) -> ClientResult<Product> {
        let id = id.to_string();
        Self::send(self.request(Method::PUT, &[id.as_str()])?.json(input)).await
    }

    async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let id = id.to_string();
        let confirmation: DeleteResponse =
            Self::send(self.request(Method::DELETE, &[id.as_str()])?).await?;
        tracing::debug!(id, message = %confirmation.message, "Product deleted");
        Ok(())
    }

    async fn toggle_sold_out(&self, id: i64) -> ClientResult<Product> {
        let id = id.to_string();
        Self::send(self.request(Method::PATCH, &[id.as_str(), "toggle-soldout"])?).await
    }
}
