use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::RoadmapSchemaVersion,
    db::models::profile::UpdateProfile,
    db::models::roadmap::{
        GenerateRoadmapRequest, NewSkillRoadmap, RoadmapData, RoadmapDetail, RoadmapSummary,
        SkillRoadmap,
    },
    db::repositories::{profiles::ProfilesRepo, roadmaps::RoadmapsRepo},
    error::AppError,
    generation::{RoadmapGenerator, parse_roadmap_document, prompt::build_roadmap_prompt},
    services::{context::RequestContext, profiles_service::ProfilesService},
};

pub struct RoadmapsService;

impl RoadmapsService {
    /// Full generation flow: persist the onboarding answers on the profile,
    /// ask the model for a document, validate it, store it, point the
    /// profile at it. The profile update happens before the model call so a
    /// failed generation still leaves the answers saved for a retry.
    pub async fn generate(
        conn: &mut PgConnection,
        generator: &dyn RoadmapGenerator,
        ctx: &RequestContext,
        req: &GenerateRoadmapRequest,
    ) -> Result<SkillRoadmap, AppError> {
        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;
        let merged_skills =
            ProfilesService::merge_onboarding_skills(&profile.existing_skills, &req.existing_skills);

        ProfilesRepo::update(
            conn,
            ctx.user_id,
            &UpdateProfile {
                target_skill: Some(Some(req.target_skill.clone())),
                education_level: Some(req.education_level.clone()),
                existing_skills: Some(merged_skills),
                weekly_hours: Some(req.weekly_hours),
                onboarding_completed: Some(true),
                ..Default::default()
            },
        )?;

        let prompt = build_roadmap_prompt(
            &req.target_skill,
            &req.education_level,
            &req.existing_skills,
            req.weekly_hours,
            req.context.as_ref(),
        );
        let content = generator.generate(&prompt).await?;
        let document = parse_roadmap_document(&content)?;

        let roadmap = RoadmapsRepo::insert(
            conn,
            &NewSkillRoadmap {
                user_id: ctx.user_id,
                target_skill: req.target_skill.clone(),
                roadmap_data: document,
                schema_version: RoadmapSchemaVersion::V2,
            },
        )?;
        ProfilesRepo::set_active_roadmap(conn, ctx.user_id, roadmap.id)?;

        tracing::info!(
            user_id = %ctx.user_id,
            roadmap_id = %roadmap.id,
            target_skill = %roadmap.target_skill,
            "roadmap generated"
        );
        Ok(roadmap)
    }

    /// The user's current roadmap: the one the profile points at, falling
    /// back to the most recently generated when the pointer is unset or
    /// dangling.
    pub fn resolve_active(
        conn: &mut PgConnection,
        ctx: &RequestContext,
    ) -> Result<Option<SkillRoadmap>, AppError> {
        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;

        if let Some(rid) = profile.active_roadmap_id {
            if let Some(roadmap) = RoadmapsRepo::find_by_id_for_user(conn, ctx.user_id, rid)? {
                return Ok(Some(roadmap));
            }
        }

        Ok(RoadmapsRepo::latest_for_user(conn, ctx.user_id)?)
    }

    pub fn get(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap_id: Uuid,
    ) -> Result<SkillRoadmap, AppError> {
        RoadmapsRepo::find_by_id_for_user(conn, ctx.user_id, roadmap_id)?
            .ok_or_else(|| AppError::not_found("Roadmap"))
    }

    pub fn list(
        conn: &mut PgConnection,
        ctx: &RequestContext,
    ) -> Result<Vec<RoadmapSummary>, AppError> {
        let roadmaps = RoadmapsRepo::list_for_user(conn, ctx.user_id)?;
        roadmaps.into_iter().map(Self::summary).collect()
    }

    pub fn detail(roadmap: SkillRoadmap) -> Result<RoadmapDetail, AppError> {
        let version = roadmap.schema_version;
        let mut data = Self::parse_document(&roadmap)?;
        data.normalize(version);

        Ok(RoadmapDetail {
            id: roadmap.id,
            user_id: roadmap.user_id,
            target_skill: roadmap.target_skill,
            schema_version: version,
            roadmap_data: data,
            created_at: roadmap.created_at,
        })
    }

    pub fn summary(roadmap: SkillRoadmap) -> Result<RoadmapSummary, AppError> {
        let data = Self::parse_document(&roadmap)?;
        Ok(RoadmapSummary {
            id: roadmap.id,
            target_skill: roadmap.target_skill,
            schema_version: roadmap.schema_version,
            phase_count: data.phases.len(),
            skill_count: data.skill_count(),
            created_at: roadmap.created_at,
        })
    }

    /// Stored documents passed the schema gate at insert time, so failure
    /// here means the row was tampered with outside the API.
    pub fn parse_document(roadmap: &SkillRoadmap) -> Result<RoadmapData, AppError> {
        serde_json::from_value(roadmap.roadmap_data.clone()).map_err(|e| {
            tracing::error!(roadmap_id = %roadmap.id, error = %e, "stored roadmap document is malformed");
            AppError::internal("Stored roadmap document is malformed")
        })
    }
}
