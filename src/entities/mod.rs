//! Entities module - stored records, response views and insert schemas
//!
//! Each submodule owns one resource: its stored record type(s), the typed
//! insert record accepted from clients, and that record's [`Schema`].
//!
//! [`Schema`]: crate::core::validation::Schema

pub mod activity;
pub mod catalog;
pub mod dimension;
pub mod goal;
pub mod research;
pub mod score;
pub mod settings;
pub mod user;
pub mod wallet;

// Re-export models for convenience
pub use activity::{InsertWellnessActivity, WellnessActivity};
pub use catalog::{InsertProduct, InsertProductCategory, Product, ProductCategory};
pub use dimension::{
    DimensionWithSubDimensions, InsertSubDimension, InsertWellnessDimension, SubDimension,
    WellnessDimension,
};
pub use goal::{GoalFilter, InsertUserWellnessGoal, UserWellnessGoal};
pub use research::{InsertResearchArticle, ResearchArticle};
pub use score::{
    InsertUserSubDimensionScore, InsertUserWellnessScore, UserSubDimensionScore,
    UserWellnessScore,
};
pub use settings::{
    InsertUserDataSetting, InsertUserNotificationSetting, UserDataSetting,
    UserNotificationSetting,
};
pub use user::{Credentials, InsertUser, PublicUser, User};
pub use wallet::{BlockchainWallet, InsertBlockchainWallet};
