//! Product categories and products

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use super::AppState;
use crate::core::extractors::{ApiPath, ApiQuery, parse_id, parse_optional_id};
use crate::core::{ApiError, ResultExt};
use crate::entities::{Product, ProductCategory};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category_id: Option<String>,
}

/// GET /product-categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductCategory>>, ApiError> {
    let categories = state
        .storage
        .get_all_product_categories()
        .await
        .or_unexpected("Failed to get product categories")?;

    Ok(Json(categories))
}

/// GET /products?categoryId=
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let category_id = parse_optional_id("categoryId", query.category_id.as_deref())?;

    let products = state
        .storage
        .get_all_products(category_id)
        .await
        .or_unexpected("Failed to get products")?;

    Ok(Json(products))
}

/// GET /products/featured
pub async fn list_featured_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .storage
        .get_featured_products()
        .await
        .or_unexpected("Failed to get featured products")?;

    Ok(Json(products))
}

/// GET /products/by-dimension/{dimensionId}
pub async fn list_products_by_dimension(
    State(state): State<AppState>,
    ApiPath(dimension_id): ApiPath<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let dimension_id = parse_id("dimensionId", &dimension_id)?;

    let products = state
        .storage
        .get_products_by_dimension(dimension_id)
        .await
        .or_unexpected("Failed to get products by dimension")?;

    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id("id", &id)?;

    let product = state
        .storage
        .get_product(id)
        .await
        .or_unexpected("Failed to get product")?
        .ok_or(ApiError::not_found("Product"))?;

    Ok(Json(product))
}
