use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::core::extractors::{ApiPath, ApiQuery, parse_id, parse_optional_id};
use crate::core::{ApiError, ResultExt, Validated};
use crate::entities::{InsertWellnessActivity, WellnessActivity};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    pub dimension_id: Option<String>,
}

/// GET /users/{userId}/activities?dimensionId=
pub async fn list_activities(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<ActivityQuery>,
) -> Result<Json<Vec<WellnessActivity>>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;
    let dimension_id = parse_optional_id("dimensionId", query.dimension_id.as_deref())?;

    let activities = state
        .storage
        .get_user_wellness_activities(user_id, dimension_id)
        .await
        .or_unexpected("Failed to get user wellness activities")?;

    Ok(Json(activities))
}

/// POST /users/{userId}/activities
pub async fn create_activity(
    State(state): State<AppState>,
    Validated(activity): Validated<InsertWellnessActivity>,
) -> Result<(StatusCode, Json<WellnessActivity>), ApiError> {
    let activity = state
        .storage
        .create_wellness_activity(activity)
        .await
        .or_unexpected("Failed to create wellness activity")?;

    Ok((StatusCode::CREATED, Json(activity)))
}
