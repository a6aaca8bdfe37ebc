//! Route table for the wellness API

use crate::handlers::{
    AppState, activities, auth, catalog, dimensions, goals, research, scores, settings, users,
    wallet,
};
use axum::Router;
use axum::routing::{get, post, put};

/// Build the API routes (mounted under `/api` by the server builder)
///
/// Static segments such as `/products/featured` take precedence over the
/// `{id}` captures next to them, so registration order does not matter.
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        // Auth and users
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users/{userId}", get(users::get_user))
        // Dimensions
        .route("/dimensions", get(dimensions::list_dimensions))
        .route("/dimensions/{id}", get(dimensions::get_dimension))
        // Scores and activities
        .route(
            "/users/{userId}/scores",
            get(scores::list_scores).post(scores::upsert_score),
        )
        .route(
            "/users/{userId}/subdimension-scores",
            get(scores::list_sub_dimension_scores).post(scores::upsert_sub_dimension_score),
        )
        .route(
            "/users/{userId}/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        // Catalog
        .route("/product-categories", get(catalog::list_categories))
        .route("/products", get(catalog::list_products))
        .route("/products/featured", get(catalog::list_featured_products))
        .route(
            "/products/by-dimension/{dimensionId}",
            get(catalog::list_products_by_dimension),
        )
        .route("/products/{id}", get(catalog::get_product))
        // Research
        .route("/research", get(research::list_articles))
        .route("/research/featured", get(research::list_featured_articles))
        .route("/research/{id}", get(research::get_article))
        // Goals
        .route(
            "/users/{userId}/goals",
            get(goals::list_goals).post(goals::create_goal),
        )
        .route(
            "/users/{userId}/goals/{goalId}/complete",
            put(goals::complete_goal),
        )
        // Wallet and settings
        .route(
            "/users/{userId}/blockchain-wallet",
            get(wallet::get_wallet).post(wallet::connect_wallet),
        )
        .route(
            "/users/{userId}/data-settings",
            get(settings::get_data_settings).put(settings::update_data_settings),
        )
        .route(
            "/users/{userId}/notification-settings",
            get(settings::get_notification_settings).put(settings::update_notification_settings),
        )
        .with_state(state)
}
