//! Blockchain wallet link (at most one per user)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainWallet {
    pub id: i32,
    pub user_id: i32,
    pub wallet_address: String,
    pub wallet_type: String,
    pub connected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBlockchainWallet {
    pub user_id: i32,
    pub wallet_address: String,
    pub wallet_type: String,
}

impl InsertSchema for InsertBlockchainWallet {
    const SCHEMA: Schema = Schema {
        name: "insertBlockchainWallet",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::required("walletAddress", FieldType::Text),
            FieldRule::required("walletType", FieldType::Text),
        ],
    };
}
