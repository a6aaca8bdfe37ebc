//! Storage collaborator trait
//!
//! The handler layer owns no state. Every request makes exactly one call on
//! a [`WellnessStorage`], which is constructed once at process start and
//! shared as `Arc<dyn WellnessStorage>`.

use crate::entities::{
    BlockchainWallet, Credentials, DimensionWithSubDimensions, GoalFilter, InsertBlockchainWallet,
    InsertProduct, InsertProductCategory, InsertResearchArticle, InsertSubDimension, InsertUser,
    InsertUserDataSetting, InsertUserNotificationSetting, InsertUserSubDimensionScore,
    InsertUserWellnessGoal, InsertUserWellnessScore, InsertWellnessActivity,
    InsertWellnessDimension, Product, ProductCategory, ResearchArticle, SubDimension, User,
    UserDataSetting, UserNotificationSetting, UserSubDimensionScore, UserWellnessGoal,
    UserWellnessScore, WellnessActivity, WellnessDimension,
};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence operations, one per resource operation
///
/// Each call is assumed atomic and durable; callers neither retry nor
/// compensate. Lookups of a single row return `Ok(None)` when it is absent;
/// `Err` is reserved for storage faults.
#[async_trait]
pub trait WellnessStorage: Send + Sync {
    // === Users ===

    async fn create_user(&self, user: InsertUser) -> Result<User>;

    async fn get_user(&self, id: i32) -> Result<Option<User>>;

    /// The user whose username and password both match exactly
    async fn verify_user_credentials(&self, credentials: &Credentials) -> Result<Option<User>>;

    // === Dimensions ===

    async fn create_wellness_dimension(
        &self,
        dimension: InsertWellnessDimension,
    ) -> Result<WellnessDimension>;

    async fn create_sub_dimension(&self, sub_dimension: InsertSubDimension)
    -> Result<SubDimension>;

    /// All dimensions sorted by their `order` field
    async fn get_all_wellness_dimensions(&self) -> Result<Vec<WellnessDimension>>;

    async fn get_wellness_dimension_with_sub_dimensions(
        &self,
        id: i32,
    ) -> Result<Option<DimensionWithSubDimensions>>;

    // === Scores ===

    async fn get_user_wellness_scores(&self, user_id: i32) -> Result<Vec<UserWellnessScore>>;

    /// Create or replace the score for (user, dimension)
    async fn update_user_wellness_score(
        &self,
        score: InsertUserWellnessScore,
    ) -> Result<UserWellnessScore>;

    async fn get_user_sub_dimension_scores(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserSubDimensionScore>>;

    /// Create or replace the score for (user, sub-dimension)
    async fn update_user_sub_dimension_score(
        &self,
        score: InsertUserSubDimensionScore,
    ) -> Result<UserSubDimensionScore>;

    // === Activities ===

    async fn get_user_wellness_activities(
        &self,
        user_id: i32,
        dimension_id: Option<i32>,
    ) -> Result<Vec<WellnessActivity>>;

    async fn create_wellness_activity(
        &self,
        activity: InsertWellnessActivity,
    ) -> Result<WellnessActivity>;

    // === Catalog ===

    async fn create_product_category(
        &self,
        category: InsertProductCategory,
    ) -> Result<ProductCategory>;

    async fn get_all_product_categories(&self) -> Result<Vec<ProductCategory>>;

    async fn create_product(&self, product: InsertProduct) -> Result<Product>;

    async fn get_all_products(&self, category_id: Option<i32>) -> Result<Vec<Product>>;

    async fn get_featured_products(&self) -> Result<Vec<Product>>;

    /// Products whose category belongs to the given dimension
    async fn get_products_by_dimension(&self, dimension_id: i32) -> Result<Vec<Product>>;

    async fn get_product(&self, id: i32) -> Result<Option<Product>>;

    // === Research ===

    async fn create_research_article(
        &self,
        article: InsertResearchArticle,
    ) -> Result<ResearchArticle>;

    async fn get_all_research_articles(
        &self,
        dimension_id: Option<i32>,
    ) -> Result<Vec<ResearchArticle>>;

    async fn get_featured_research_articles(&self) -> Result<Vec<ResearchArticle>>;

    async fn get_research_article(&self, id: i32) -> Result<Option<ResearchArticle>>;

    // === Goals ===

    async fn get_user_wellness_goals(
        &self,
        user_id: i32,
        filter: GoalFilter,
    ) -> Result<Vec<UserWellnessGoal>>;

    async fn create_user_wellness_goal(
        &self,
        goal: InsertUserWellnessGoal,
    ) -> Result<UserWellnessGoal>;

    /// Mark a goal complete; `None` if it does not exist or belongs to
    /// another user
    async fn complete_user_wellness_goal(
        &self,
        user_id: i32,
        goal_id: i32,
    ) -> Result<Option<UserWellnessGoal>>;

    // === Blockchain wallet ===

    /// Link a wallet to the user, replacing any previous one
    async fn connect_blockchain_wallet(
        &self,
        wallet: InsertBlockchainWallet,
    ) -> Result<BlockchainWallet>;

    async fn get_blockchain_wallet(&self, user_id: i32) -> Result<Option<BlockchainWallet>>;

    // === Settings ===

    async fn get_user_data_settings(&self, user_id: i32) -> Result<Option<UserDataSetting>>;

    async fn update_user_data_settings(
        &self,
        settings: InsertUserDataSetting,
    ) -> Result<UserDataSetting>;

    async fn get_user_notification_settings(
        &self,
        user_id: i32,
    ) -> Result<Option<UserNotificationSetting>>;

    async fn update_user_notification_settings(
        &self,
        settings: InsertUserNotificationSetting,
    ) -> Result<UserNotificationSetting>;
}
