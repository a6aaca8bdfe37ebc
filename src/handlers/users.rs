use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::core::extractors::{ApiPath, parse_id};
use crate::core::{ApiError, ResultExt};
use crate::entities::PublicUser;

/// GET /users/{userId}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let user = state
        .storage
        .get_user(user_id)
        .await
        .or_unexpected("Failed to get user")?
        .ok_or(ApiError::not_found("User"))?;

    Ok(Json(user.into()))
}
