use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Profile models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub education_level: Option<String>,
    pub existing_skills: Vec<String>,
    pub target_skill: Option<String>,
    pub weekly_hours: Option<i32>,
    pub weekly_goal_hours: Option<i32>,
    pub onboarding_completed: bool,
    pub active_roadmap_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::profiles)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: Option<String>,
    pub existing_skills: Vec<String>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::profiles)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub education_level: Option<String>,
    pub existing_skills: Option<Vec<String>>,
    pub target_skill: Option<Option<String>>,
    pub weekly_hours: Option<i32>,
    pub weekly_goal_hours: Option<i32>,
    pub onboarding_completed: Option<bool>,
    pub active_roadmap_id: Option<Option<Uuid>>,
}

/// Where the user sits in the onboarding funnel. Computed from the profile
/// row in one place so every surface agrees on what to show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStage {
    NeedsAssessment,
    NeedsCareerChoice,
    NeedsOnboarding,
    Ready,
}

// Profile API DTOs
#[derive(Serialize)]
pub struct ProfileInfo {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub education_level: Option<String>,
    pub existing_skills: Vec<String>,
    pub target_skill: Option<String>,
    pub weekly_hours: Option<i32>,
    pub weekly_goal_hours: Option<i32>,
    pub onboarding_completed: bool,
    pub active_roadmap_id: Option<Uuid>,
    pub stage: ProfileStage,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 255, message = "Full name must be at most 255 characters"))]
    pub full_name: Option<String>,
    pub education_level: Option<String>,
    pub existing_skills: Option<Vec<String>>,
    #[validate(range(min = 1, max = 80, message = "Weekly hours must be between 1 and 80"))]
    pub weekly_hours: Option<i32>,
    #[validate(range(min = 1, max = 80, message = "Weekly goal must be between 1 and 80 hours"))]
    pub weekly_goal_hours: Option<i32>,
}

#[derive(Deserialize)]
pub struct AssessmentRequest {
    pub answers: Vec<String>,
}

#[derive(Deserialize)]
pub struct CareerRequest {
    /// Empty string clears the current choice and sends the user back to
    /// career selection.
    pub target_skill: String,
}
