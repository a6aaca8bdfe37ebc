//! Axum extractor for validated insert records
//!
//! `Validated<T>` reads the JSON body, merges in any path parameter whose name
//! is also an integer field of `T`'s schema (so `/users/{userId}/goals` fills
//! `userId`), then runs the schema.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use std::collections::HashMap;

use super::schema::{FieldType, InsertSchema};
use crate::core::error::ApiError;
use crate::core::extractors::{JsonBody, parse_id, path_rejection};

/// Axum extractor that validates the request body against `T::SCHEMA`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_goal(
///     State(state): State<AppState>,
///     Validated(goal): Validated<InsertUserWellnessGoal>,
/// ) -> Result<(StatusCode, Json<UserWellnessGoal>), ApiError> {
///     // goal.user_id already comes from the URL
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: InsertSchema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
        {
            Ok(Path(params)) => params,
            // Route without captures
            Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
            Err(rejection) => return Err(path_rejection(rejection)),
        };

        let mut path_ids = Vec::new();
        for (name, raw) in &params {
            let is_id_field = T::SCHEMA
                .field(name)
                .is_some_and(|rule| rule.field_type == FieldType::Integer);
            if is_id_field {
                path_ids.push((name.as_str(), parse_id(name, raw)?));
            }
        }

        let mut payload = JsonBody::from_request(Request::from_parts(parts, body), state).await?;
        for (name, id) in &path_ids {
            payload = payload.merge_id(name, *id);
        }

        let record = T::validate(payload.into_inner())?;
        Ok(Validated(record))
    }
}
