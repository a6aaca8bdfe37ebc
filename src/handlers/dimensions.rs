//! Wellness dimensions (read-only reference data)

use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::core::extractors::{ApiPath, parse_id};
use crate::core::{ApiError, ResultExt};
use crate::entities::{DimensionWithSubDimensions, WellnessDimension};

/// GET /dimensions
pub async fn list_dimensions(
    State(state): State<AppState>,
) -> Result<Json<Vec<WellnessDimension>>, ApiError> {
    let dimensions = state
        .storage
        .get_all_wellness_dimensions()
        .await
        .or_unexpected("Failed to get wellness dimensions")?;

    Ok(Json(dimensions))
}

/// GET /dimensions/{id}
pub async fn get_dimension(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<DimensionWithSubDimensions>, ApiError> {
    let id = parse_id("id", &id)?;

    let dimension = state
        .storage
        .get_wellness_dimension_with_sub_dimensions(id)
        .await
        .or_unexpected("Failed to get wellness dimension")?
        .ok_or(ApiError::not_found("Dimension"))?;

    Ok(Json(dimension))
}
