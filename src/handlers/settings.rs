//! Data-sharing and notification preferences
//!
//! PUT merges the fields present in the body into the stored row, creating
//! it with defaults on first write.

use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::core::extractors::{ApiPath, parse_id};
use crate::core::{ApiError, ResultExt, Validated};
use crate::entities::{
    InsertUserDataSetting, InsertUserNotificationSetting, UserDataSetting,
    UserNotificationSetting,
};

/// GET /users/{userId}/data-settings
pub async fn get_data_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<UserDataSetting>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let settings = state
        .storage
        .get_user_data_settings(user_id)
        .await
        .or_unexpected("Failed to get user data settings")?
        .ok_or(ApiError::not_found("User data settings"))?;

    Ok(Json(settings))
}

/// PUT /users/{userId}/data-settings
pub async fn update_data_settings(
    State(state): State<AppState>,
    Validated(settings): Validated<InsertUserDataSetting>,
) -> Result<Json<UserDataSetting>, ApiError> {
    let settings = state
        .storage
        .update_user_data_settings(settings)
        .await
        .or_unexpected("Failed to update user data settings")?;

    Ok(Json(settings))
}

/// GET /users/{userId}/notification-settings
pub async fn get_notification_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<UserNotificationSetting>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let settings = state
        .storage
        .get_user_notification_settings(user_id)
        .await
        .or_unexpected("Failed to get user notification settings")?
        .ok_or(ApiError::not_found("User notification settings"))?;

    Ok(Json(settings))
}

/// PUT /users/{userId}/notification-settings
pub async fn update_notification_settings(
    State(state): State<AppState>,
    Validated(settings): Validated<InsertUserNotificationSetting>,
) -> Result<Json<UserNotificationSetting>, ApiError> {
    let settings = state
        .storage
        .update_user_notification_settings(settings)
        .await
        .or_unexpected("Failed to update user notification settings")?;

    Ok(Json(settings))
}
