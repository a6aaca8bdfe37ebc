//! Research articles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchArticle {
    pub id: i32,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub authors: String,
    pub journal: Option<String>,
    /// Free-form, e.g. "2023" or "March 2021"
    pub publication_date: Option<String>,
    pub dimension_id: Option<i32>,
    pub image_url: Option<String>,
    pub content_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResearchArticle {
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub authors: String,
    pub journal: Option<String>,
    pub publication_date: Option<String>,
    pub dimension_id: Option<i32>,
    pub image_url: Option<String>,
    pub content_url: Option<String>,
}

impl InsertSchema for InsertResearchArticle {
    const SCHEMA: Schema = Schema {
        name: "insertResearchArticle",
        fields: &[
            FieldRule::required("title", FieldType::Text),
            FieldRule::required("abstract", FieldType::Text),
            FieldRule::required("authors", FieldType::Text),
            FieldRule::optional("journal", FieldType::Text),
            FieldRule::optional("publicationDate", FieldType::Text),
            FieldRule::optional("dimensionId", FieldType::Integer),
            FieldRule::optional("imageUrl", FieldType::Text),
            FieldRule::optional("contentUrl", FieldType::Text),
        ],
    };
}
