//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::{CategoryFilter, DeleteResponse, ListQuery, Product, ProductInput, ProductList};

use crate::api::convert::parse_product_id;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_product_input;

/// GET /api/products - 获取商品列表 (支持分页和分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ProductList>> {
    let products = state
        .products()
        .list(&query.category(), query.page(), query.limit())
        .await?;
    Ok(Json(products))
}

/// GET /api/products/category/{category} - 按主分类获取商品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ProductList>> {
    let filter = CategoryFilter::parse(&category);
    let products = state
        .products()
        .list(&filter, query.page(), query.limit())
        .await?;
    Ok(Json(products))
}

/// GET /api/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let product = state.products().get(id).await?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    validate_product_input(&payload)?;
    let product = state.products().create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let Json(payload) = payload?;
    validate_product_input(&payload)?;
    let product = state.products().update(id, payload).await?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}/toggle-soldout - 切换售罄状态
pub async fn toggle_sold_out(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let product = state.products().toggle_sold_out(id).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_product_id(&id)?;
    state.products().delete(id).await?;
    Ok(Json(DeleteResponse::new("Product deleted successfully")))
}
