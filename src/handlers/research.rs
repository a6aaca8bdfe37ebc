use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use super::AppState;
use crate::core::extractors::{ApiPath, ApiQuery, parse_id, parse_optional_id};
use crate::core::{ApiError, ResultExt};
use crate::entities::ResearchArticle;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchQuery {
    pub dimension_id: Option<String>,
}

/// GET /research?dimensionId=
pub async fn list_articles(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ResearchQuery>,
) -> Result<Json<Vec<ResearchArticle>>, ApiError> {
    let dimension_id = parse_optional_id("dimensionId", query.dimension_id.as_deref())?;

    let articles = state
        .storage
        .get_all_research_articles(dimension_id)
        .await
        .or_unexpected("Failed to get research articles")?;

    Ok(Json(articles))
}

/// GET /research/featured
pub async fn list_featured_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResearchArticle>>, ApiError> {
    let articles = state
        .storage
        .get_featured_research_articles()
        .await
        .or_unexpected("Failed to get featured research articles")?;

    Ok(Json(articles))
}

/// GET /research/{id}
pub async fn get_article(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ResearchArticle>, ApiError> {
    let id = parse_id("id", &id)?;

    let article = state
        .storage
        .get_research_article(id)
        .await
        .or_unexpected("Failed to get research article")?
        .ok_or(ApiError::not_found("Research article"))?;

    Ok(Json(article))
}
