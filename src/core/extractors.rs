//! Axum extractors and parameter parsing
//!
//! Path and query values arrive as strings. Anything that should be an
//! integer id or a boolean flag is parsed here, and a malformed value is
//! rejected with a 400 naming the parameter rather than being passed along.

use axum::Json;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{ApiError, ValidationError};

/// Raw JSON request body
///
/// Same as `Json<Value>`, but a malformed body becomes an [`ApiError`] so it
/// renders like every other error the API returns.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// Merge a path-derived id into the body, overriding any client value
    ///
    /// Non-object bodies are left alone; schema validation rejects them.
    pub fn merge_id(mut self, key: &str, id: i32) -> Self {
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.to_string(), Value::from(id));
        }
        self
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|e| ValidationError::InvalidJson {
                message: e.body_text(),
            })?;

        Ok(JsonBody(payload))
    }
}

/// `Path<T>` whose rejection renders as an [`ApiError`]
///
/// Handlers take raw `String` segments through it and parse ids with
/// [`parse_id`], so a bad segment names the parameter it came from.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(ApiPath(value))
    }
}

/// `Query<T>` whose rejection renders as an [`ApiError`]
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationError::InvalidRequest {
                message: e.body_text(),
            })?;
        Ok(ApiQuery(value))
    }
}

/// Map a path rejection onto the parameter it concerns, when axum names one
pub fn path_rejection(rejection: PathRejection) -> ApiError {
    if let PathRejection::FailedToDeserializePathParams(err) = &rejection {
        match err.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } => {
                return ValidationError::InvalidParameter {
                    name: key.clone(),
                    value: String::new(),
                }
                .into();
            }
            ErrorKind::ParseErrorAtKey { key, value, .. } => {
                return ValidationError::InvalidParameter {
                    name: key.clone(),
                    value: value.clone(),
                }
                .into();
            }
            _ => {}
        }
    }

    ValidationError::InvalidRequest {
        message: rejection.body_text(),
    }
    .into()
}

/// Parse an integer path segment
pub fn parse_id(name: &str, raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| {
        ApiError::from(ValidationError::InvalidParameter {
            name: name.to_string(),
            value: raw.to_string(),
        })
    })
}

/// Parse an optional integer query filter; an empty value counts as absent
pub fn parse_optional_id(name: &str, raw: Option<&str>) -> Result<Option<i32>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_id(name, s).map(Some),
    }
}

/// Parse an optional boolean query filter (`true` / `false`)
pub fn parse_optional_bool(name: &str, raw: Option<&str>) -> Result<Option<bool>, ApiError> {
    match raw {
        None => Ok(None),
        Some("") => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(ValidationError::InvalidParameter {
            name: name.to_string(),
            value: other.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("id", "42").unwrap(), 42);
        assert!(parse_id("id", "abc").is_err());
        assert!(parse_id("id", "1.5").is_err());
        assert!(parse_id("id", "").is_err());
    }

    #[test]
    fn test_parse_id_error_names_parameter() {
        let err = parse_id("goalId", "NaN").unwrap_err();
        assert_eq!(err.to_string(), "Invalid goalId");
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id("dimensionId", None).unwrap(), None);
        assert_eq!(parse_optional_id("dimensionId", Some("")).unwrap(), None);
        assert_eq!(parse_optional_id("dimensionId", Some("3")).unwrap(), Some(3));
        assert!(parse_optional_id("dimensionId", Some("physical")).is_err());
    }

    #[test]
    fn test_parse_optional_bool() {
        assert_eq!(parse_optional_bool("completed", None).unwrap(), None);
        assert_eq!(parse_optional_bool("completed", Some("true")).unwrap(), Some(true));
        assert_eq!(parse_optional_bool("completed", Some("false")).unwrap(), Some(false));
        assert!(parse_optional_bool("completed", Some("yes")).is_err());
    }

    #[test]
    fn test_merge_id_overrides_body_value() {
        let body = JsonBody(json!({ "userId": 999, "score": 5 })).merge_id("userId", 7);
        assert_eq!(body.0["userId"], 7);
        assert_eq!(body.0["score"], 5);
    }

    #[test]
    fn test_merge_id_leaves_non_objects_alone() {
        let body = JsonBody(json!("hello")).merge_id("userId", 7);
        assert_eq!(body.into_inner(), json!("hello"));
    }
}
