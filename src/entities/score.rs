//! Per-user scores for dimensions and sub-dimensions
//!
//! There is one evolving row per (user, dimension) and per
//! (user, sub-dimension). Posting a score replaces the previous value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWellnessScore {
    pub id: i32,
    pub user_id: i32,
    pub dimension_id: i32,
    pub score: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubDimensionScore {
    pub id: i32,
    pub user_id: i32,
    pub sub_dimension_id: i32,
    pub score: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserWellnessScore {
    pub user_id: i32,
    pub dimension_id: i32,
    pub score: i32,
}

impl InsertSchema for InsertUserWellnessScore {
    const SCHEMA: Schema = Schema {
        name: "insertUserWellnessScore",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::required("dimensionId", FieldType::Integer),
            FieldRule::required("score", FieldType::Integer),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserSubDimensionScore {
    pub user_id: i32,
    pub sub_dimension_id: i32,
    pub score: i32,
}

impl InsertSchema for InsertUserSubDimensionScore {
    const SCHEMA: Schema = Schema {
        name: "insertUserSubDimensionScore",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::required("subDimensionId", FieldType::Integer),
            FieldRule::required("score", FieldType::Integer),
        ],
    };
}
