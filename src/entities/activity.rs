//! Dated wellness activity log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessActivity {
    pub id: i32,
    pub user_id: i32,
    pub dimension_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// When the activity happened, as reported by the client
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWellnessActivity {
    pub user_id: i32,
    pub dimension_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl InsertSchema for InsertWellnessActivity {
    const SCHEMA: Schema = Schema {
        name: "insertWellnessActivity",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::required("dimensionId", FieldType::Integer),
            FieldRule::required("title", FieldType::Text),
            FieldRule::optional("description", FieldType::Text),
            FieldRule::required("date", FieldType::Timestamp),
        ],
    };
}
