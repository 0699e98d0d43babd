use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Skill note models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::skill_notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SkillNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub skill_name: String,
    pub phase: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::skill_notes)]
pub struct NewSkillNote {
    pub user_id: Uuid,
    pub roadmap_id: Uuid,
    pub skill_name: String,
    pub phase: String,
    pub content: String,
}

// Note API DTOs
#[derive(Deserialize, Validate)]
pub struct SaveNoteRequest {
    #[validate(length(min = 1, message = "Phase is required"))]
    pub phase: String,
    #[validate(length(min = 1, message = "Skill name is required"))]
    pub skill_name: String,
    #[validate(length(max = 50000, message = "Note is too long"))]
    pub content: String,
}

#[derive(Serialize)]
pub struct NoteView {
    pub content: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
