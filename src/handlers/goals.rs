//! Wellness goals
//!
//! Goals move one way only: open to completed. Completing twice is a no-op
//! that still returns the goal.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::core::extractors::{
    ApiPath, ApiQuery, parse_id, parse_optional_bool, parse_optional_id,
};
use crate::core::{ApiError, ResultExt, Validated};
use crate::entities::{GoalFilter, InsertUserWellnessGoal, UserWellnessGoal};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalQuery {
    pub dimension_id: Option<String>,
    pub completed: Option<String>,
}

impl GoalQuery {
    fn into_filter(self) -> Result<GoalFilter, ApiError> {
        Ok(GoalFilter {
            dimension_id: parse_optional_id("dimensionId", self.dimension_id.as_deref())?,
            completed: parse_optional_bool("completed", self.completed.as_deref())?,
        })
    }
}

/// GET /users/{userId}/goals?dimensionId=&completed=
pub async fn list_goals(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<GoalQuery>,
) -> Result<Json<Vec<UserWellnessGoal>>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;
    let filter = query.into_filter()?;

    let goals = state
        .storage
        .get_user_wellness_goals(user_id, filter)
        .await
        .or_unexpected("Failed to get user wellness goals")?;

    Ok(Json(goals))
}

/// POST /users/{userId}/goals
pub async fn create_goal(
    State(state): State<AppState>,
    Validated(goal): Validated<InsertUserWellnessGoal>,
) -> Result<(StatusCode, Json<UserWellnessGoal>), ApiError> {
    let goal = state
        .storage
        .create_user_wellness_goal(goal)
        .await
        .or_unexpected("Failed to create user wellness goal")?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// PUT /users/{userId}/goals/{goalId}/complete
pub async fn complete_goal(
    State(state): State<AppState>,
    ApiPath((user_id, goal_id)): ApiPath<(String, String)>,
) -> Result<Json<UserWellnessGoal>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;
    let goal_id = parse_id("goalId", &goal_id)?;

    let goal = state
        .storage
        .complete_user_wellness_goal(user_id, goal_id)
        .await
        .or_unexpected("Failed to complete user wellness goal")?
        .ok_or(ApiError::not_found("Goal"))?;

    tracing::debug!(user_id, goal_id, "goal completed");
    Ok(Json(goal))
}
