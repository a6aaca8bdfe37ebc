//! Per-user data and notification settings
//!
//! Each user has at most one row of each kind. An update fills only the
//! fields it carries: on an existing row the rest keep their values, on a new
//! row the rest take the defaults below.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

pub const DEFAULT_PROFILE_VISIBILITY: &str = "private";
pub const DEFAULT_EMAIL_FREQUENCY: &str = "weekly";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataSetting {
    pub id: i32,
    pub user_id: i32,
    pub share_anonymous_data: bool,
    pub contribute_to_research: bool,
    pub profile_visibility: String,
    pub blockchain_storage: bool,
    pub updated_at: DateTime<Utc>,
}

impl UserDataSetting {
    /// Row with every default applied
    pub fn with_defaults(id: i32, user_id: i32) -> Self {
        Self {
            id,
            user_id,
            share_anonymous_data: true,
            contribute_to_research: true,
            profile_visibility: DEFAULT_PROFILE_VISIBILITY.to_string(),
            blockchain_storage: false,
            updated_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: InsertUserDataSetting) {
        if let Some(v) = update.share_anonymous_data {
            self.share_anonymous_data = v;
        }
        if let Some(v) = update.contribute_to_research {
            self.contribute_to_research = v;
        }
        if let Some(v) = update.profile_visibility {
            self.profile_visibility = v;
        }
        if let Some(v) = update.blockchain_storage {
            self.blockchain_storage = v;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNotificationSetting {
    pub id: i32,
    pub user_id: i32,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub product_updates: bool,
    pub research_updates: bool,
    pub marketplace_offers: bool,
    pub wellness_reminders: bool,
    pub email_frequency: String,
    pub updated_at: DateTime<Utc>,
}

impl UserNotificationSetting {
    pub fn with_defaults(id: i32, user_id: i32) -> Self {
        Self {
            id,
            user_id,
            email_notifications: true,
            push_notifications: true,
            product_updates: false,
            research_updates: true,
            marketplace_offers: false,
            wellness_reminders: true,
            email_frequency: DEFAULT_EMAIL_FREQUENCY.to_string(),
            updated_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: InsertUserNotificationSetting) {
        let flags = [
            (update.email_notifications, &mut self.email_notifications),
            (update.push_notifications, &mut self.push_notifications),
            (update.product_updates, &mut self.product_updates),
            (update.research_updates, &mut self.research_updates),
            (update.marketplace_offers, &mut self.marketplace_offers),
            (update.wellness_reminders, &mut self.wellness_reminders),
        ];
        for (value, slot) in flags {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(v) = update.email_frequency {
            self.email_frequency = v;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserDataSetting {
    pub user_id: i32,
    pub share_anonymous_data: Option<bool>,
    pub contribute_to_research: Option<bool>,
    pub profile_visibility: Option<String>,
    pub blockchain_storage: Option<bool>,
}

impl InsertSchema for InsertUserDataSetting {
    const SCHEMA: Schema = Schema {
        name: "insertUserDataSetting",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::optional("shareAnonymousData", FieldType::Boolean),
            FieldRule::optional("contributeToResearch", FieldType::Boolean),
            FieldRule::optional("profileVisibility", FieldType::Text),
            FieldRule::optional("blockchainStorage", FieldType::Boolean),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserNotificationSetting {
    pub user_id: i32,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub product_updates: Option<bool>,
    pub research_updates: Option<bool>,
    pub marketplace_offers: Option<bool>,
    pub wellness_reminders: Option<bool>,
    pub email_frequency: Option<String>,
}

impl InsertSchema for InsertUserNotificationSetting {
    const SCHEMA: Schema = Schema {
        name: "insertUserNotificationSetting",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::optional("emailNotifications", FieldType::Boolean),
            FieldRule::optional("pushNotifications", FieldType::Boolean),
            FieldRule::optional("productUpdates", FieldType::Boolean),
            FieldRule::optional("researchUpdates", FieldType::Boolean),
            FieldRule::optional("marketplaceOffers", FieldType::Boolean),
            FieldRule::optional("wellnessReminders", FieldType::Boolean),
            FieldRule::optional("emailFrequency", FieldType::Text),
        ],
    };
}
