use crate::utils::resource_link::ResourceLink;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

// Skill progress models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::skill_progress)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SkillProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub phase: String,
    pub skill_name: String,
    pub completed: bool,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = crate::schema::skill_progress)]
pub struct NewSkillProgress {
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub phase: String,
    pub skill_name: String,
    pub completed: bool,
}

// Progress API DTOs
#[derive(Deserialize, Validate)]
pub struct CompleteSkillRequest {
    #[validate(length(min = 1, message = "Phase is required"))]
    pub phase: String,
    #[validate(length(min = 1, message = "Skill name is required"))]
    pub skill_name: String,
}

#[derive(Deserialize, Validate)]
pub struct QuizSubmissionRequest {
    #[validate(length(min = 1, message = "Phase is required"))]
    pub phase: String,
    #[validate(length(min = 1, message = "Skill name is required"))]
    pub skill_name: String,
    /// Question index to selected option index.
    pub answers: BTreeMap<usize, usize>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct QuizResult {
    pub passed: bool,
    pub score: usize,
    pub total: usize,
    pub threshold: usize,
}

#[derive(Serialize)]
pub struct SkillProgressView {
    pub name: String,
    pub completed: bool,
    pub locked: bool,
    pub has_quiz: bool,
    pub time_estimate: Option<String>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Serialize)]
pub struct PhaseProgress {
    pub name: String,
    pub completion_percent: i32,
    pub skills: Vec<SkillProgressView>,
}

#[derive(Serialize)]
pub struct RoadmapProgress {
    pub roadmap_id: Uuid,
    pub total_skills: usize,
    pub completed_skills: usize,
    pub overall_percent: i32,
    pub phases: Vec<PhaseProgress>,
}

#[derive(Deserialize)]
pub struct SkillQuery {
    pub phase: String,
    pub skill_name: String,
}

/// Everything the skill page needs in one response: document content,
/// lock/completion state, the saved note, and display-ready resources.
#[derive(Serialize)]
pub struct SkillDetailView {
    pub roadmap_id: Uuid,
    pub phase: String,
    pub name: String,
    pub description: String,
    pub time_estimate: Option<String>,
    pub completed: bool,
    pub locked: bool,
    pub quiz_question_count: usize,
    pub resources: Vec<ResourceLink>,
    pub weak_points: Vec<serde_json::Value>,
    pub note: Option<String>,
}
