//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Storage faults become 500s carrying a resource-specific message
//! - The storage cause never reaches the response body
//! - Parameter errors are caught before storage is touched
//! - Error bodies always carry a `message`

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wellness_api::prelude::*;

// =============================================================================
// Failing Storage
// =============================================================================

const CAUSE: &str = "connection reset by peer";

/// Storage whose every call fails, counting how often it was reached
#[derive(Default)]
struct FailingStorage {
    calls: AtomicUsize,
}

impl FailingStorage {
    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!(CAUSE))
    }
}

#[async_trait]
impl WellnessStorage for FailingStorage {
    async fn create_user(&self, _: InsertUser) -> Result<User> {
        self.fail()
    }
    async fn get_user(&self, _: i32) -> Result<Option<User>> {
        self.fail()
    }
    async fn verify_user_credentials(&self, _: &Credentials) -> Result<Option<User>> {
        self.fail()
    }
    async fn create_wellness_dimension(
        &self,
        _: InsertWellnessDimension,
    ) -> Result<WellnessDimension> {
        self.fail()
    }
    async fn create_sub_dimension(&self, _: InsertSubDimension) -> Result<SubDimension> {
        self.fail()
    }
    async fn get_all_wellness_dimensions(&self) -> Result<Vec<WellnessDimension>> {
        self.fail()
    }
    async fn get_wellness_dimension_with_sub_dimensions(
        &self,
        _: i32,
    ) -> Result<Option<DimensionWithSubDimensions>> {
        self.fail()
    }
    async fn get_user_wellness_scores(&self, _: i32) -> Result<Vec<UserWellnessScore>> {
        self.fail()
    }
    async fn update_user_wellness_score(
        &self,
        _: InsertUserWellnessScore,
    ) -> Result<UserWellnessScore> {
        self.fail()
    }
    async fn get_user_sub_dimension_scores(&self, _: i32) -> Result<Vec<UserSubDimensionScore>> {
        self.fail()
    }
    async fn update_user_sub_dimension_score(
        &self,
        _: InsertUserSubDimensionScore,
    ) -> Result<UserSubDimensionScore> {
        self.fail()
    }
    async fn get_user_wellness_activities(
        &self,
        _: i32,
        _: Option<i32>,
    ) -> Result<Vec<WellnessActivity>> {
        self.fail()
    }
    async fn create_wellness_activity(
        &self,
        _: InsertWellnessActivity,
    ) -> Result<WellnessActivity> {
        self.fail()
    }
    async fn create_product_category(&self, _: InsertProductCategory) -> Result<ProductCategory> {
        self.fail()
    }
    async fn get_all_product_categories(&self) -> Result<Vec<ProductCategory>> {
        self.fail()
    }
    async fn create_product(&self, _: InsertProduct) -> Result<Product> {
        self.fail()
    }
    async fn get_all_products(&self, _: Option<i32>) -> Result<Vec<Product>> {
        self.fail()
    }
    async fn get_featured_products(&self) -> Result<Vec<Product>> {
        self.fail()
    }
    async fn get_products_by_dimension(&self, _: i32) -> Result<Vec<Product>> {
        self.fail()
    }
    async fn get_product(&self, _: i32) -> Result<Option<Product>> {
        self.fail()
    }
    async fn create_research_article(&self, _: InsertResearchArticle) -> Result<ResearchArticle> {
        self.fail()
    }
    async fn get_all_research_articles(&self, _: Option<i32>) -> Result<Vec<ResearchArticle>> {
        self.fail()
    }
    async fn get_featured_research_articles(&self) -> Result<Vec<ResearchArticle>> {
        self.fail()
    }
    async fn get_research_article(&self, _: i32) -> Result<Option<ResearchArticle>> {
        self.fail()
    }
    async fn get_user_wellness_goals(
        &self,
        _: i32,
        _: GoalFilter,
    ) -> Result<Vec<UserWellnessGoal>> {
        self.fail()
    }
    async fn create_user_wellness_goal(
        &self,
        _: InsertUserWellnessGoal,
    ) -> Result<UserWellnessGoal> {
        self.fail()
    }
    async fn complete_user_wellness_goal(
        &self,
        _: i32,
        _: i32,
    ) -> Result<Option<UserWellnessGoal>> {
        self.fail()
    }
    async fn connect_blockchain_wallet(
        &self,
        _: InsertBlockchainWallet,
    ) -> Result<BlockchainWallet> {
        self.fail()
    }
    async fn get_blockchain_wallet(&self, _: i32) -> Result<Option<BlockchainWallet>> {
        self.fail()
    }
    async fn get_user_data_settings(&self, _: i32) -> Result<Option<UserDataSetting>> {
        self.fail()
    }
    async fn update_user_data_settings(
        &self,
        _: InsertUserDataSetting,
    ) -> Result<UserDataSetting> {
        self.fail()
    }
    async fn get_user_notification_settings(
        &self,
        _: i32,
    ) -> Result<Option<UserNotificationSetting>> {
        self.fail()
    }
    async fn update_user_notification_settings(
        &self,
        _: InsertUserNotificationSetting,
    ) -> Result<UserNotificationSetting> {
        self.fail()
    }
}

fn create_failing_server() -> (TestServer, Arc<FailingStorage>) {
    let storage = Arc::new(FailingStorage::default());

    let app = ServerBuilder::new()
        .with_shared_storage(storage.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::new(app).expect("Failed to create test server");
    (server, storage)
}

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err = ApiError::from(ValidationError::FieldErrors(vec![FieldValidationError::new(
            "title", "Required",
        )]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_invalid_credentials_returns_401() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_returns_404() {
        let err = ApiError::not_found("Goal");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Goal not found");
    }

    #[test]
    fn test_unexpected_returns_500() {
        let err = ApiError::unexpected("Failed to get products");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Storage Fault Tests
// =============================================================================

mod storage_fault_tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_map_to_resource_messages() {
        let (server, _) = create_failing_server();

        let cases = [
            ("/api/users/1", "Failed to get user"),
            ("/api/dimensions", "Failed to get wellness dimensions"),
            ("/api/dimensions/1", "Failed to get wellness dimension"),
            ("/api/users/1/scores", "Failed to get user wellness scores"),
            (
                "/api/users/1/subdimension-scores",
                "Failed to get user sub-dimension scores",
            ),
            (
                "/api/users/1/activities",
                "Failed to get user wellness activities",
            ),
            ("/api/product-categories", "Failed to get product categories"),
            ("/api/products", "Failed to get products"),
            ("/api/products/featured", "Failed to get featured products"),
            (
                "/api/products/by-dimension/1",
                "Failed to get products by dimension",
            ),
            ("/api/products/1", "Failed to get product"),
            ("/api/research", "Failed to get research articles"),
            (
                "/api/research/featured",
                "Failed to get featured research articles",
            ),
            ("/api/research/1", "Failed to get research article"),
            ("/api/users/1/goals", "Failed to get user wellness goals"),
            ("/api/users/1/blockchain-wallet", "Failed to get blockchain wallet"),
            ("/api/users/1/data-settings", "Failed to get user data settings"),
            (
                "/api/users/1/notification-settings",
                "Failed to get user notification settings",
            ),
        ];

        for (path, message) in cases {
            let response = server.get(path).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = response.json();
            assert_eq!(body, json!({"message": message}), "GET {}", path);
        }
    }

    #[tokio::test]
    async fn test_writes_map_to_resource_messages() {
        let (server, _) = create_failing_server();

        let cases = [
            (
                "/api/auth/register",
                json!({"username": "alice", "password": "x"}),
                "Failed to create user",
            ),
            (
                "/api/auth/login",
                json!({"username": "alice", "password": "x"}),
                "Login failed",
            ),
            (
                "/api/users/1/scores",
                json!({"dimensionId": 1, "score": 5}),
                "Failed to update user wellness score",
            ),
            (
                "/api/users/1/subdimension-scores",
                json!({"subDimensionId": 1, "score": 5}),
                "Failed to update user sub-dimension score",
            ),
            (
                "/api/users/1/activities",
                json!({"dimensionId": 1, "title": "Walk", "date": "2024-01-01T00:00:00Z"}),
                "Failed to create wellness activity",
            ),
            (
                "/api/users/1/goals",
                json!({"dimensionId": 1, "title": "Walk"}),
                "Failed to create user wellness goal",
            ),
            (
                "/api/users/1/blockchain-wallet",
                json!({"walletAddress": "0x1", "walletType": "metamask"}),
                "Failed to connect blockchain wallet",
            ),
        ];

        for (path, payload, message) in cases {
            let response = server.post(path).json(&payload).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = response.json();
            assert_eq!(body["message"], message, "POST {}", path);
        }

        let puts = [
            ("/api/users/1/goals/1/complete", "Failed to complete user wellness goal"),
            ("/api/users/1/data-settings", "Failed to update user data settings"),
            (
                "/api/users/1/notification-settings",
                "Failed to update user notification settings",
            ),
        ];

        for (path, message) in puts {
            let response = server.put(path).json(&json!({})).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = response.json();
            assert_eq!(body["message"], message, "PUT {}", path);
        }
    }

    #[tokio::test]
    async fn test_cause_is_not_leaked() {
        let (server, _) = create_failing_server();

        let response = server.get("/api/products/1").await;

        assert!(!response.text().contains(CAUSE));
    }
}

// =============================================================================
// Early Rejection Tests
// =============================================================================

mod early_rejection_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_path_id_never_reaches_storage() {
        let (server, storage) = create_failing_server();

        for path in [
            "/api/users/abc",
            "/api/dimensions/x",
            "/api/products/1.5",
            "/api/research/-",
            "/api/users/abc/goals",
        ] {
            server.get(path).await.assert_status(StatusCode::BAD_REQUEST);
        }

        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_storage() {
        let (server, storage) = create_failing_server();

        let response = server
            .post("/api/users/1/goals")
            .json(&json!({"title": 7}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected() {
        let (server, _) = create_failing_server();

        let response = server
            .post("/api/users/1/scores")
            .json(&json!([1, 2, 3]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"][0]["message"], "Expected object, received array");
    }

    #[tokio::test]
    async fn test_login_without_credentials_never_reaches_storage() {
        let (server, storage) = create_failing_server();

        let response = server.post("/api/auth/login").json(&json!({})).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicate_query_parameter_is_json_400() {
        let (server, storage) = create_failing_server();

        let response = server
            .get("/api/users/1/goals?completed=true&completed=false")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.header("content-type"), "application/json");
        let body: Value = response.json();
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Failed to deserialize query string"));
        assert!(message.contains("completed"));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_undecodable_path_segment_names_parameter() {
        let (server, storage) = create_failing_server();

        for path in ["/api/users/%FF", "/api/users/%FF/goals", "/api/products/%FF"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(response.header("content-type"), "application/json");
        }

        let body: Value = server.get("/api/users/%FF").await.json();
        assert_eq!(body, json!({"message": "Invalid userId"}));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_undecodable_path_segment_on_write_is_not_a_field_error() {
        let (server, storage) = create_failing_server();

        let response = server
            .post("/api/users/%FF/scores")
            .json(&json!({"dimensionId": 1, "score": 5}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body, json!({"message": "Invalid userId"}));

        let response = server
            .put("/api/users/abc/data-settings")
            .json(&json!({}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid userId");
        assert!(body.get("errors").is_none());

        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }
}
