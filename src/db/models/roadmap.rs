use crate::db::enums::RoadmapSchemaVersion;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Roadmap models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::skill_roadmaps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SkillRoadmap {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_skill: String,
    pub roadmap_data: serde_json::Value,
    pub schema_version: RoadmapSchemaVersion,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::skill_roadmaps)]
pub struct NewSkillRoadmap {
    pub user_id: Uuid,
    pub target_skill: String,
    pub roadmap_data: serde_json::Value,
    pub schema_version: RoadmapSchemaVersion,
}

// Roadmap document model. Generated documents are only guaranteed to have
// a `phases` array; every leaf field is best-effort prompt output, so
// everything except the array itself deserializes defensively.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoadmapData {
    #[serde(default)]
    pub phases: Vec<Phase>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Phase {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(
        default,
        rename = "estimatedTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quiz: Vec<QuizQuestion>,
    /// Auxiliary review content some documents embed. Carried through
    /// verbatim, never interpreted server-side.
    #[serde(
        default,
        rename = "weakPoints",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub weak_points: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, rename = "correctAnswer")]
    pub correct_answer: usize,
}

impl RoadmapData {
    /// Flatten the document into its ordered (phase name, skill name)
    /// sequence. Progress rows key on these pairs and the unlock chain
    /// walks them in exactly this order.
    pub fn skill_keys(&self) -> Vec<(String, String)> {
        self.phases
            .iter()
            .flat_map(|phase| {
                phase
                    .skills
                    .iter()
                    .map(|skill| (phase.name.clone(), skill.name.clone()))
            })
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.phases.iter().map(|p| p.skills.len()).sum()
    }

    pub fn find_skill(&self, phase: &str, skill_name: &str) -> Option<&Skill> {
        self.phases
            .iter()
            .find(|p| p.name == phase)?
            .skills
            .iter()
            .find(|s| s.name == skill_name)
    }

    /// Settle each skill's time estimate into the canonical `days` field.
    /// v1 documents wrote `estimatedTime`, v2 writes `days`; the version's
    /// preferred field wins and the other is the fallback, so half-migrated
    /// documents still render.
    pub fn normalize(&mut self, version: RoadmapSchemaVersion) {
        for phase in &mut self.phases {
            for skill in &mut phase.skills {
                skill.days = match version {
                    RoadmapSchemaVersion::V2 => {
                        skill.days.take().or_else(|| skill.estimated_time.take())
                    }
                    RoadmapSchemaVersion::V1 => {
                        skill.estimated_time.take().or_else(|| skill.days.take())
                    }
                };
                skill.estimated_time = None;
            }
        }
    }
}

// Roadmap API DTOs

/// Request shape of the generation endpoint. Field casing matches what the
/// existing frontend sends.
#[derive(Deserialize, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    #[validate(length(min = 1, max = 200, message = "Target skill is required"))]
    pub target_skill: String,
    #[validate(length(min = 1, max = 200, message = "Education level is required"))]
    pub education_level: String,
    #[serde(default)]
    pub existing_skills: Vec<String>,
    #[validate(range(min = 1, max = 80, message = "Weekly hours must be between 1 and 80"))]
    pub weekly_hours: i32,
    #[serde(default)]
    pub context: Option<GenerationContext>,
}

/// Optional free-form hints forwarded into the prompt.
#[derive(Deserialize, Serialize, Clone, Default)]
pub struct GenerationContext {
    pub level: Option<String>,
    pub background: Option<String>,
    pub goal: Option<String>,
    pub daily_time: Option<String>,
    pub target_duration: Option<String>,
}

#[derive(Serialize)]
pub struct RoadmapDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_skill: String,
    pub schema_version: RoadmapSchemaVersion,
    pub roadmap_data: RoadmapData,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct RoadmapSummary {
    pub id: Uuid,
    pub target_skill: String,
    pub schema_version: RoadmapSchemaVersion,
    pub phase_count: usize,
    pub skill_count: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
