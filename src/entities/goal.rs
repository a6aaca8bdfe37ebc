//! User wellness goals
//!
//! `completed` only ever moves from false to true. Completing a goal that is
//! already complete is a no-op that returns the same state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldRule, FieldType, InsertSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWellnessGoal {
    pub id: i32,
    pub user_id: i32,
    pub dimension_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl UserWellnessGoal {
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserWellnessGoal {
    pub user_id: i32,
    pub dimension_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

impl InsertSchema for InsertUserWellnessGoal {
    const SCHEMA: Schema = Schema {
        name: "insertUserWellnessGoal",
        fields: &[
            FieldRule::required("userId", FieldType::Integer),
            FieldRule::required("dimensionId", FieldType::Integer),
            FieldRule::required("title", FieldType::Text),
            FieldRule::optional("description", FieldType::Text),
            FieldRule::optional("targetDate", FieldType::Timestamp),
            FieldRule::optional("completed", FieldType::Boolean),
        ],
    };
}

/// Query filters for listing a user's goals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalFilter {
    pub dimension_id: Option<i32>,
    /// `None` returns goals in either state
    pub completed: Option<bool>,
}

impl GoalFilter {
    pub fn matches(&self, goal: &UserWellnessGoal) -> bool {
        self.dimension_id.is_none_or(|d| goal.dimension_id == d)
            && self.completed.is_none_or(|c| goal.completed == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(dimension_id: i32, completed: bool) -> UserWellnessGoal {
        UserWellnessGoal {
            id: 1,
            user_id: 1,
            dimension_id,
            title: "Walk daily".to_string(),
            description: None,
            target_date: None,
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut g = goal(1, false);
        g.complete();
        g.complete();
        assert!(g.completed);
    }

    #[test]
    fn test_filter_matches() {
        let open = goal(1, false);
        let done = goal(2, true);

        assert!(GoalFilter::default().matches(&open));
        assert!(GoalFilter::default().matches(&done));

        let only_done = GoalFilter {
            completed: Some(true),
            ..Default::default()
        };
        assert!(!only_done.matches(&open));
        assert!(only_done.matches(&done));

        let dim_one = GoalFilter {
            dimension_id: Some(1),
            ..Default::default()
        };
        assert!(dim_one.matches(&open));
        assert!(!dim_one.matches(&done));
    }
}
