//! 客户端目录状态
//!
//! 持有从服务器加载的全部商品、当前分类过滤结果 (下标) 和分页状态。
//! 每个会话一个实例，没有全局变量。
//!
//! # 约定
//!
//! - `filtered` 中的下标总是指向 `all`，因此过滤结果必然是全集的子集
//! - 任何过滤之后回到第 1 页；刷新之后分类重置为 `all` 并回到第 1 页

use shared::{CategoryFilter, ListQuery, Product, ProductInput};

use super::filter::filter_indices;
use super::{Notice, PageControls, Pagination};
use crate::http::ProductApi;

/// 首页精选商品数量
pub const FEATURED_COUNT: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    all: Vec<Product>,
    filtered: Vec<usize>,
    category: CategoryFilter,
    pagination: Pagination,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    // ========== 加载 ==========

    /// 加载全部商品，重置分类为 `all` 并回到第 1 页
    ///
    /// 失败时清空列表并返回错误提示
    pub async fn load<A>(&mut self, api: &A) -> Result<usize, Notice>
    where
        A: ProductApi + ?Sized,
    {
        match api.list_products(&ListQuery::all()).await {
            Ok(list) => {
                self.category = CategoryFilter::All;
                self.replace(list.products);
                tracing::debug!(count = self.all.len(), "Catalog loaded");
                Ok(self.all.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                self.category = CategoryFilter::All;
                self.replace(Vec::new());
                Err(Notice::error("Failed to load products. Please try again."))
            }
        }
    }

    /// 重新加载，分类重置为 `all` 并回到第 1 页
    ///
    /// 失败时保留已缓存的列表和当前分类
    pub async fn refresh<A>(&mut self, api: &A) -> Result<usize, Notice>
    where
        A: ProductApi + ?Sized,
    {
        match api.list_products(&ListQuery::all()).await {
            Ok(list) => {
                self.category = CategoryFilter::All;
                self.replace(list.products);
                tracing::debug!(count = self.all.len(), "Catalog refreshed");
                Ok(self.all.len())
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    cached = self.all.len(),
                    "Refresh failed, keeping cached products"
                );
                Err(Notice::error("Failed to refresh products. Please try again."))
            }
        }
    }

    fn replace(&mut self, products: Vec<Product>) {
        self.all = products;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_indices(&self.all, &self.category);
        self.pagination.reset(self.filtered.len());
    }

    // ========== 过滤与分页 ==========

    /// 切换分类过滤并回到第 1 页
    pub fn filter(&mut self, category: CategoryFilter) {
        self.category = category;
        self.apply_filter();
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// 当前分类下的全部商品
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        self.filtered.iter().map(|&i| &self.all[i])
    }

    pub fn total_products(&self) -> usize {
        self.all.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// 当前页的商品
    pub fn current_page_items(&self) -> Vec<&Product> {
        self.pagination
            .current_slice(&self.filtered)
            .iter()
            .map(|&i| &self.all[i])
            .collect()
    }

    pub fn page_controls(&self) -> PageControls {
        self.pagination.layout()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// 全集中的前 `n` 个商品
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.all[..n.min(self.all.len())]
    }

    // ========== 修改 (成功后刷新) ==========

    pub async fn create_product<A>(
        &mut self,
        api: &A,
        input: &ProductInput,
    ) -> Result<Product, Notice>
    where
        A: ProductApi + ?Sized,
    {
        let product = api.create_product(input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create product");
            Notice::error(format!("Failed to add product: {e}"))
        })?;
        self.refresh_after_change(api).await;
        Ok(product)
    }

    pub async fn update_product<A>(
        &mut self,
        api: &A,
        id: i64,
        input: &ProductInput,
    ) -> Result<Product, Notice>
    where
        A: ProductApi + ?Sized,
    {
        let product = api.update_product(id, input).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to update product");
            Notice::error(format!("Failed to update product: {e}"))
        })?;
        self.refresh_after_change(api).await;
        Ok(product)
    }

    pub async fn delete_product<A>(&mut self, api: &A, id: i64) -> Result<(), Notice>
    where
        A: ProductApi + ?Sized,
    {
        api.delete_product(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to delete product");
            Notice::error("Failed to delete product.")
        })?;
        self.refresh_after_change(api).await;
        Ok(())
    }

    pub async fn toggle_sold_out<A>(&mut self, api: &A, id: i64) -> Result<Product, Notice>
    where
        A: ProductApi + ?Sized,
    {
        let product = api.toggle_sold_out(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to toggle sold-out");
            Notice::error("Failed to update product status.")
        })?;
        self.refresh_after_change(api).await;
        Ok(product)
    }

    /// 修改已成功，刷新失败只影响缓存新鲜度
    async fn refresh_after_change<A>(&mut self, api: &A)
    where
        A: ProductApi + ?Sized,
    {
        if let Err(notice) = self.refresh(api).await {
            tracing::warn!(notice = %notice, "Catalog is stale after change");
        }
    }
}

/// 切换售罄后的提示文案
pub fn sold_out_notice(product: &Product) -> Notice {
    if product.sold_out {
        Notice::success(format!("{} marked as sold out!", product.name))
    } else {
        Notice::success(format!("{} restocked!", product.name))
    }
}
