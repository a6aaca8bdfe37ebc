//! Per-user dimension and sub-dimension scores
//!
//! Posting a score replaces the user's previous score for the same
//! dimension; the response is 201 either way.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::AppState;
use crate::core::extractors::{ApiPath, parse_id};
use crate::core::{ApiError, ResultExt, Validated};
use crate::entities::{
    InsertUserSubDimensionScore, InsertUserWellnessScore, UserSubDimensionScore,
    UserWellnessScore,
};

/// GET /users/{userId}/scores
pub async fn list_scores(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<Vec<UserWellnessScore>>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let scores = state
        .storage
        .get_user_wellness_scores(user_id)
        .await
        .or_unexpected("Failed to get user wellness scores")?;

    Ok(Json(scores))
}

/// POST /users/{userId}/scores
pub async fn upsert_score(
    State(state): State<AppState>,
    Validated(score): Validated<InsertUserWellnessScore>,
) -> Result<(StatusCode, Json<UserWellnessScore>), ApiError> {
    let score = state
        .storage
        .update_user_wellness_score(score)
        .await
        .or_unexpected("Failed to update user wellness score")?;

    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /users/{userId}/subdimension-scores
pub async fn list_sub_dimension_scores(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<Vec<UserSubDimensionScore>>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let scores = state
        .storage
        .get_user_sub_dimension_scores(user_id)
        .await
        .or_unexpected("Failed to get user sub-dimension scores")?;

    Ok(Json(scores))
}

/// POST /users/{userId}/subdimension-scores
pub async fn upsert_sub_dimension_score(
    State(state): State<AppState>,
    Validated(score): Validated<InsertUserSubDimensionScore>,
) -> Result<(StatusCode, Json<UserSubDimensionScore>), ApiError> {
    let score = state
        .storage
        .update_user_sub_dimension_score(score)
        .await
        .or_unexpected("Failed to update user sub-dimension score")?;

    Ok((StatusCode::CREATED, Json(score)))
}
