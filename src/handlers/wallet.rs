use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::AppState;
use crate::core::extractors::{ApiPath, parse_id};
use crate::core::{ApiError, ResultExt, Validated};
use crate::entities::{BlockchainWallet, InsertBlockchainWallet};

/// POST /users/{userId}/blockchain-wallet
///
/// Replaces the wallet already linked to the user, if any.
pub async fn connect_wallet(
    State(state): State<AppState>,
    Validated(wallet): Validated<InsertBlockchainWallet>,
) -> Result<(StatusCode, Json<BlockchainWallet>), ApiError> {
    let wallet = state
        .storage
        .connect_blockchain_wallet(wallet)
        .await
        .or_unexpected("Failed to connect blockchain wallet")?;

    Ok((StatusCode::CREATED, Json(wallet)))
}

/// GET /users/{userId}/blockchain-wallet
pub async fn get_wallet(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<BlockchainWallet>, ApiError> {
    let user_id = parse_id("userId", &user_id)?;

    let wallet = state
        .storage
        .get_blockchain_wallet(user_id)
        .await
        .or_unexpected("Failed to get blockchain wallet")?
        .ok_or(ApiError::not_found("Blockchain wallet"))?;

    Ok(Json(wallet))
}
