use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Learning activity models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::learning_activity)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LearningActivity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: chrono::NaiveDate,
    pub minutes_spent: i32,
    pub skills_completed: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::learning_activity)]
pub struct NewLearningActivity {
    pub user_id: Uuid,
    pub date: chrono::NaiveDate,
    pub minutes_spent: i32,
    pub skills_completed: i32,
}

// Activity API DTOs
#[derive(Deserialize, Validate)]
pub struct RecordActivityRequest {
    #[validate(range(min = 0, max = 1440, message = "Minutes must be between 0 and 1440"))]
    pub minutes_spent: i32,
    #[validate(range(min = 0, message = "Skills completed cannot be negative"))]
    pub skills_completed: Option<i32>,
    /// Defaults to today (UTC) when omitted.
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct DailyActivity {
    pub date: chrono::NaiveDate,
    pub minutes_spent: i32,
    pub skills_completed: i32,
}

#[derive(Serialize)]
pub struct ActivityStats {
    pub streak_days: u32,
    pub weekly_minutes: i32,
    pub total_minutes: i32,
    pub weekly_goal_percent: i32,
    pub completed_skills: usize,
    pub total_skills: usize,
    pub completion_percent: i32,
    /// Last 7 calendar days, oldest first, zero-filled.
    pub daily: Vec<DailyActivity>,
}
