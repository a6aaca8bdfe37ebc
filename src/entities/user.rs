//! User accounts
//!
//! [`User`] is the stored row and deliberately does not implement
//! `Serialize`: the only way to put a user into a response is through
//! [`PublicUser`], which has no password field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

/// Stored user row
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Plain text, compared verbatim on login
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
    pub profession: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response view of a user, without the password
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
    pub profession: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            password: _,
            name,
            email,
            profile_picture,
            profession,
            bio,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            username,
            name,
            email,
            profile_picture,
            profession,
            bio,
            created_at,
            updated_at,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
    pub bio: Option<String>,
}

impl InsertSchema for InsertUser {
    const SCHEMA: Schema = Schema {
        name: "insertUser",
        fields: &[
            FieldRule::required("username", FieldType::Text),
            FieldRule::required("password", FieldType::Text),
            FieldRule::optional("name", FieldType::Text),
            FieldRule::optional("email", FieldType::Text),
            FieldRule::optional("profession", FieldType::Text),
            FieldRule::optional("bio", FieldType::Text),
        ],
    };
}

/// Login payload
///
/// Not schema-validated: a body without a string `username` and `password`
/// simply cannot match a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_json(body: &Value) -> Option<Self> {
        Some(Self {
            username: body.get("username")?.as_str()?.to_string(),
            password: body.get("password")?.as_str()?.to_string(),
        })
    }
}
