//! Product catalog: categories and products

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i32,
    pub name: String,
    pub dimension_id: Option<i32>,
    pub description: Option<String>,
    pub color_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Minor currency units (cents)
    pub price: i32,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub rating: Option<i32>,
    pub review_count: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProductCategory {
    pub name: String,
    pub dimension_id: Option<i32>,
    pub description: Option<String>,
    pub color_name: Option<String>,
}

impl InsertSchema for InsertProductCategory {
    const SCHEMA: Schema = Schema {
        name: "insertProductCategory",
        fields: &[
            FieldRule::required("name", FieldType::Text),
            FieldRule::optional("dimensionId", FieldType::Integer),
            FieldRule::optional("description", FieldType::Text),
            FieldRule::optional("colorName", FieldType::Text),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProduct {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub rating: Option<i32>,
    pub review_count: Option<i32>,
}

impl InsertSchema for InsertProduct {
    const SCHEMA: Schema = Schema {
        name: "insertProduct",
        fields: &[
            FieldRule::required("name", FieldType::Text),
            FieldRule::required("description", FieldType::Text),
            FieldRule::required("price", FieldType::Integer),
            FieldRule::required("categoryId", FieldType::Integer),
            FieldRule::optional("imageUrl", FieldType::Text),
            FieldRule::optional("rating", FieldType::Integer),
            FieldRule::optional("reviewCount", FieldType::Integer),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_must_be_whole_minor_units() {
        let err = InsertProduct::validate(json!({
            "name": "Mat",
            "description": "Yoga mat",
            "price": 19.99,
            "categoryId": 1
        }))
        .unwrap_err();

        assert_eq!(err.fields(), vec!["price"]);
    }
}
