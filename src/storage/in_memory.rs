//! In-memory implementation of WellnessStorage for testing and development

use super::StorageError;
use crate::core::WellnessStorage;
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
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Number of products returned by `get_featured_products`
pub const FEATURED_PRODUCT_LIMIT: usize = 4;

/// Number of articles returned by `get_featured_research_articles`
pub const FEATURED_ARTICLE_LIMIT: usize = 3;

/// One table: rows keyed by a serial id that starts at 1
#[derive(Debug)]
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.rows.values_mut().find(|row| pred(row))
    }

    /// Matching rows in id order
    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }
}

type Shared<T> = Arc<RwLock<Table<T>>>;

fn shared<T: Clone>() -> Shared<T> {
    Arc::new(RwLock::new(Table::new()))
}

fn read<T>(table: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    table
        .read()
        .map_err(|e| StorageError::Poisoned(format!("Failed to acquire read lock: {}", e)).into())
}

fn write<T>(table: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    table
        .write()
        .map_err(|e| StorageError::Poisoned(format!("Failed to acquire write lock: {}", e)).into())
}

/// In-memory storage implementation
///
/// Useful for testing and development. Each table sits behind its own
/// RwLock, so concurrent upserts on the same table are serialized.
#[derive(Clone)]
pub struct InMemoryStorage {
    users: Shared<User>,
    dimensions: Shared<WellnessDimension>,
    sub_dimensions: Shared<SubDimension>,
    wellness_scores: Shared<UserWellnessScore>,
    sub_dimension_scores: Shared<UserSubDimensionScore>,
    activities: Shared<WellnessActivity>,
    product_categories: Shared<ProductCategory>,
    products: Shared<Product>,
    research_articles: Shared<ResearchArticle>,
    goals: Shared<UserWellnessGoal>,
    wallets: Shared<BlockchainWallet>,
    data_settings: Shared<UserDataSetting>,
    notification_settings: Shared<UserNotificationSetting>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self {
            users: shared(),
            dimensions: shared(),
            sub_dimensions: shared(),
            wellness_scores: shared(),
            sub_dimension_scores: shared(),
            activities: shared(),
            product_categories: shared(),
            products: shared(),
            research_articles: shared(),
            goals: shared(),
            wallets: shared(),
            data_settings: shared(),
            notification_settings: shared(),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WellnessStorage for InMemoryStorage {
    async fn create_user(&self, user: InsertUser) -> Result<User> {
        let mut users = write(&self.users)?;

        if users.find(|u| u.username == user.username).is_some() {
            return Err(StorageError::UniqueViolation {
                table: "users",
                column: "username",
            }
            .into());
        }

        let now = Utc::now();
        let created = users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
            name: user.name,
            email: user.email,
            profile_picture: None,
            profession: user.profession,
            bio: user.bio,
            created_at: now,
            updated_at: now,
        });

        tracing::debug!(user_id = created.id, "user created");
        Ok(created)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>> {
        Ok(read(&self.users)?.get(id))
    }

    async fn verify_user_credentials(&self, credentials: &Credentials) -> Result<Option<User>> {
        Ok(read(&self.users)?.find(|u| {
            u.username == credentials.username && u.password == credentials.password
        }))
    }

    async fn create_wellness_dimension(
        &self,
        dimension: InsertWellnessDimension,
    ) -> Result<WellnessDimension> {
        Ok(write(&self.dimensions)?.insert_with(|id| WellnessDimension {
            id,
            name: dimension.name,
            description: dimension.description,
            icon_name: dimension.icon_name,
            color_hex: dimension.color_hex,
            order: dimension.order,
        }))
    }

    async fn create_sub_dimension(
        &self,
        sub_dimension: InsertSubDimension,
    ) -> Result<SubDimension> {
        Ok(write(&self.sub_dimensions)?.insert_with(|id| SubDimension {
            id,
            dimension_id: sub_dimension.dimension_id,
            name: sub_dimension.name,
            description: sub_dimension.description,
            icon_name: sub_dimension.icon_name,
        }))
    }

    async fn get_all_wellness_dimensions(&self) -> Result<Vec<WellnessDimension>> {
        let mut dimensions = read(&self.dimensions)?.filter(|_| true);
        dimensions.sort_by_key(|d| (d.order, d.id));
        Ok(dimensions)
    }

    async fn get_wellness_dimension_with_sub_dimensions(
        &self,
        id: i32,
    ) -> Result<Option<DimensionWithSubDimensions>> {
        let Some(dimension) = read(&self.dimensions)?.get(id) else {
            return Ok(None);
        };
        let sub_dimensions = read(&self.sub_dimensions)?.filter(|s| s.dimension_id == id);

        Ok(Some(DimensionWithSubDimensions {
            dimension,
            sub_dimensions,
        }))
    }

    async fn get_user_wellness_scores(&self, user_id: i32) -> Result<Vec<UserWellnessScore>> {
        Ok(read(&self.wellness_scores)?.filter(|s| s.user_id == user_id))
    }

    async fn update_user_wellness_score(
        &self,
        score: InsertUserWellnessScore,
    ) -> Result<UserWellnessScore> {
        let mut scores = write(&self.wellness_scores)?;
        let now = Utc::now();

        if let Some(existing) = scores
            .find_mut(|s| s.user_id == score.user_id && s.dimension_id == score.dimension_id)
        {
            existing.score = score.score;
            existing.last_updated = now;
            return Ok(existing.clone());
        }

        Ok(scores.insert_with(|id| UserWellnessScore {
            id,
            user_id: score.user_id,
            dimension_id: score.dimension_id,
            score: score.score,
            last_updated: now,
        }))
    }

    async fn get_user_sub_dimension_scores(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserSubDimensionScore>> {
        Ok(read(&self.sub_dimension_scores)?.filter(|s| s.user_id == user_id))
    }

    async fn update_user_sub_dimension_score(
        &self,
        score: InsertUserSubDimensionScore,
    ) -> Result<UserSubDimensionScore> {
        let mut scores = write(&self.sub_dimension_scores)?;
        let now = Utc::now();

        if let Some(existing) = scores.find_mut(|s| {
            s.user_id == score.user_id && s.sub_dimension_id == score.sub_dimension_id
        }) {
            existing.score = score.score;
            existing.last_updated = now;
            return Ok(existing.clone());
        }

        Ok(scores.insert_with(|id| UserSubDimensionScore {
            id,
            user_id: score.user_id,
            sub_dimension_id: score.sub_dimension_id,
            score: score.score,
            last_updated: now,
        }))
    }

    async fn get_user_wellness_activities(
        &self,
        user_id: i32,
        dimension_id: Option<i32>,
    ) -> Result<Vec<WellnessActivity>> {
        let mut activities = read(&self.activities)?.filter(|a| {
            a.user_id == user_id && dimension_id.is_none_or(|d| a.dimension_id == d)
        });
        // Most recent first
        activities.sort_by_key(|a| Reverse((a.date, a.id)));
        Ok(activities)
    }

    async fn create_wellness_activity(
        &self,
        activity: InsertWellnessActivity,
    ) -> Result<WellnessActivity> {
        let created = write(&self.activities)?.insert_with(|id| WellnessActivity {
            id,
            user_id: activity.user_id,
            dimension_id: activity.dimension_id,
            title: activity.title,
            description: activity.description,
            date: activity.date,
            created_at: Utc::now(),
        });

        tracing::debug!(
            user_id = created.user_id,
            activity_id = created.id,
            "activity logged"
        );
        Ok(created)
    }

    async fn create_product_category(
        &self,
        category: InsertProductCategory,
    ) -> Result<ProductCategory> {
        Ok(write(&self.product_categories)?.insert_with(|id| ProductCategory {
            id,
            name: category.name,
            dimension_id: category.dimension_id,
            description: category.description,
            color_name: category.color_name,
        }))
    }

    async fn get_all_product_categories(&self) -> Result<Vec<ProductCategory>> {
        Ok(read(&self.product_categories)?.filter(|_| true))
    }

    async fn create_product(&self, product: InsertProduct) -> Result<Product> {
        Ok(write(&self.products)?.insert_with(|id| Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            image_url: product.image_url,
            rating: product.rating,
            review_count: product.review_count,
            created_at: Utc::now(),
        }))
    }

    async fn get_all_products(&self, category_id: Option<i32>) -> Result<Vec<Product>> {
        Ok(read(&self.products)?.filter(|p| category_id.is_none_or(|c| p.category_id == c)))
    }

    async fn get_featured_products(&self) -> Result<Vec<Product>> {
        let mut products = read(&self.products)?.filter(|_| true);
        // Best rated first, unrated last; ties keep catalog order
        products.sort_by_key(|p| (Reverse(p.rating.unwrap_or(i32::MIN)), p.id));
        products.truncate(FEATURED_PRODUCT_LIMIT);
        Ok(products)
    }

    async fn get_products_by_dimension(&self, dimension_id: i32) -> Result<Vec<Product>> {
        let category_ids: Vec<i32> = read(&self.product_categories)?
            .filter(|c| c.dimension_id == Some(dimension_id))
            .into_iter()
            .map(|c| c.id)
            .collect();

        Ok(read(&self.products)?.filter(|p| category_ids.contains(&p.category_id)))
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        Ok(read(&self.products)?.get(id))
    }

    async fn create_research_article(
        &self,
        article: InsertResearchArticle,
    ) -> Result<ResearchArticle> {
        Ok(write(&self.research_articles)?.insert_with(|id| ResearchArticle {
            id,
            title: article.title,
            summary: article.summary,
            authors: article.authors,
            journal: article.journal,
            publication_date: article.publication_date,
            dimension_id: article.dimension_id,
            image_url: article.image_url,
            content_url: article.content_url,
            created_at: Utc::now(),
        }))
    }

    async fn get_all_research_articles(
        &self,
        dimension_id: Option<i32>,
    ) -> Result<Vec<ResearchArticle>> {
        Ok(read(&self.research_articles)?
            .filter(|a| dimension_id.is_none_or(|d| a.dimension_id == Some(d))))
    }

    async fn get_featured_research_articles(&self) -> Result<Vec<ResearchArticle>> {
        let mut articles = read(&self.research_articles)?.filter(|_| true);
        // Newest first
        articles.sort_by_key(|a| (Reverse(a.created_at), a.id));
        articles.truncate(FEATURED_ARTICLE_LIMIT);
        Ok(articles)
    }

    async fn get_research_article(&self, id: i32) -> Result<Option<ResearchArticle>> {
        Ok(read(&self.research_articles)?.get(id))
    }

    async fn get_user_wellness_goals(
        &self,
        user_id: i32,
        filter: GoalFilter,
    ) -> Result<Vec<UserWellnessGoal>> {
        Ok(read(&self.goals)?.filter(|g| g.user_id == user_id && filter.matches(g)))
    }

    async fn create_user_wellness_goal(
        &self,
        goal: InsertUserWellnessGoal,
    ) -> Result<UserWellnessGoal> {
        Ok(write(&self.goals)?.insert_with(|id| UserWellnessGoal {
            id,
            user_id: goal.user_id,
            dimension_id: goal.dimension_id,
            title: goal.title,
            description: goal.description,
            target_date: goal.target_date,
            completed: goal.completed.unwrap_or(false),
            created_at: Utc::now(),
        }))
    }

    async fn complete_user_wellness_goal(
        &self,
        user_id: i32,
        goal_id: i32,
    ) -> Result<Option<UserWellnessGoal>> {
        let mut goals = write(&self.goals)?;

        Ok(goals
            .find_mut(|g| g.id == goal_id && g.user_id == user_id)
            .map(|goal| {
                goal.complete();
                goal.clone()
            }))
    }

    async fn connect_blockchain_wallet(
        &self,
        wallet: InsertBlockchainWallet,
    ) -> Result<BlockchainWallet> {
        let mut wallets = write(&self.wallets)?;
        let now = Utc::now();

        if let Some(existing) = wallets.find_mut(|w| w.user_id == wallet.user_id) {
            existing.wallet_address = wallet.wallet_address;
            existing.wallet_type = wallet.wallet_type;
            existing.connected_at = now;
            tracing::debug!(user_id = existing.user_id, "blockchain wallet replaced");
            return Ok(existing.clone());
        }

        Ok(wallets.insert_with(|id| BlockchainWallet {
            id,
            user_id: wallet.user_id,
            wallet_address: wallet.wallet_address,
            wallet_type: wallet.wallet_type,
            connected_at: now,
        }))
    }

    async fn get_blockchain_wallet(&self, user_id: i32) -> Result<Option<BlockchainWallet>> {
        Ok(read(&self.wallets)?.find(|w| w.user_id == user_id))
    }

    async fn get_user_data_settings(&self, user_id: i32) -> Result<Option<UserDataSetting>> {
        Ok(read(&self.data_settings)?.find(|s| s.user_id == user_id))
    }

    async fn update_user_data_settings(
        &self,
        settings: InsertUserDataSetting,
    ) -> Result<UserDataSetting> {
        let mut table = write(&self.data_settings)?;
        let user_id = settings.user_id;

        if let Some(existing) = table.find_mut(|s| s.user_id == user_id) {
            existing.apply(settings);
            return Ok(existing.clone());
        }

        Ok(table.insert_with(|id| {
            let mut row = UserDataSetting::with_defaults(id, user_id);
            row.apply(settings);
            row
        }))
    }

    async fn get_user_notification_settings(
        &self,
        user_id: i32,
    ) -> Result<Option<UserNotificationSetting>> {
        Ok(read(&self.notification_settings)?.find(|s| s.user_id == user_id))
    }

    async fn update_user_notification_settings(
        &self,
        settings: InsertUserNotificationSetting,
    ) -> Result<UserNotificationSetting> {
        let mut table = write(&self.notification_settings)?;
        let user_id = settings.user_id;

        if let Some(existing) = table.find_mut(|s| s.user_id == user_id) {
            existing.apply(settings);
            return Ok(existing.clone());
        }

        Ok(table.insert_with(|id| {
            let mut row = UserNotificationSetting::with_defaults(id, user_id);
            row.apply(settings);
            row
        }))
    }
}
