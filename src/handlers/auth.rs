//! Registration and login

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::AppState;
use crate::core::{ApiError, JsonBody, ResultExt, Validated};
use crate::entities::{Credentials, InsertUser, PublicUser};

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Validated(user): Validated<InsertUser>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let user = state
        .storage
        .create_user(user)
        .await
        .or_unexpected("Failed to create user")?;

    tracing::info!(user_id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login
///
/// A body without string `username` and `password` can never match, so it
/// gets the same 401 as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<PublicUser>, ApiError> {
    let Some(credentials) = Credentials::from_json(&body) else {
        tracing::warn!("login rejected: missing credentials");
        return Err(ApiError::InvalidCredentials);
    };

    let user = state
        .storage
        .verify_user_credentials(&credentials)
        .await
        .or_unexpected("Login failed")?;

    match user {
        Some(user) => Ok(Json(user.into())),
        None => {
            tracing::warn!(username = %credentials.username, "login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}
