//! Wellness dimensions and their sub-dimensions

use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

/// A top-level wellness category (physical, mental, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessDimension {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub color_hex: Option<String>,
    /// Display position; listings are sorted by it
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDimension {
    pub id: i32,
    pub dimension_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

/// A dimension together with all of its sub-dimensions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionWithSubDimensions {
    #[serde(flatten)]
    pub dimension: WellnessDimension,
    pub sub_dimensions: Vec<SubDimension>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWellnessDimension {
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub color_hex: Option<String>,
    pub order: i32,
}

impl InsertSchema for InsertWellnessDimension {
    const SCHEMA: Schema = Schema {
        name: "insertWellnessDimension",
        fields: &[
            FieldRule::required("name", FieldType::Text),
            FieldRule::optional("description", FieldType::Text),
            FieldRule::optional("iconName", FieldType::Text),
            FieldRule::optional("colorHex", FieldType::Text),
            FieldRule::required("order", FieldType::Integer),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSubDimension {
    pub dimension_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

impl InsertSchema for InsertSubDimension {
    const SCHEMA: Schema = Schema {
        name: "insertSubDimension",
        fields: &[
            FieldRule::required("dimensionId", FieldType::Integer),
            FieldRule::required("name", FieldType::Text),
            FieldRule::optional("description", FieldType::Text),
            FieldRule::optional("iconName", FieldType::Text),
        ],
    };
}
