use diesel::prelude::*;

use crate::{
    db::models::profile::{
        AssessmentRequest, CareerRequest, Profile, ProfileInfo, ProfileStage, UpdateProfile,
        UpdateProfileRequest,
    },
    db::repositories::profiles::ProfilesRepo,
    error::AppError,
    services::context::RequestContext,
    validation::profile::validate_assessment_answers,
};

/// Assessment answers are stored as tags inside `existing_skills`, one
/// `General_Q{n}: {answer}` entry per question plus one derived
/// `Recommended: {track}` entry. Plain skill names share the same column.
pub const ASSESSMENT_TAG_PREFIX: &str = "General_Q";
pub const RECOMMENDED_TAG_PREFIX: &str = "Recommended: ";

/// Tag of the final question; its presence means the assessment finished.
const FINAL_ASSESSMENT_TAG: &str = "General_Q4";

pub struct ProfilesService;

impl ProfilesService {
    pub fn get(conn: &mut PgConnection, ctx: &RequestContext) -> Result<ProfileInfo, AppError> {
        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;
        Ok(Self::to_info(profile))
    }

    pub fn update(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &UpdateProfileRequest,
    ) -> Result<ProfileInfo, AppError> {
        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;

        let changes = UpdateProfile {
            full_name: req.full_name.clone(),
            education_level: req.education_level.clone(),
            existing_skills: req.existing_skills.clone(),
            weekly_hours: req.weekly_hours,
            weekly_goal_hours: req.weekly_goal_hours,
            ..Default::default()
        };

        if changes.full_name.is_none()
            && changes.education_level.is_none()
            && changes.existing_skills.is_none()
            && changes.weekly_hours.is_none()
            && changes.weekly_goal_hours.is_none()
        {
            return Ok(Self::to_info(profile));
        }

        let updated = ProfilesRepo::update(conn, ctx.user_id, &changes)?;
        Ok(Self::to_info(updated))
    }

    pub fn submit_assessment(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &AssessmentRequest,
    ) -> Result<ProfileInfo, AppError> {
        validate_assessment_answers(&req.answers)?;

        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;
        let skills = Self::apply_assessment(&profile.existing_skills, &req.answers);

        let updated = ProfilesRepo::update(
            conn,
            ctx.user_id,
            &UpdateProfile {
                existing_skills: Some(skills),
                ..Default::default()
            },
        )?;
        Ok(Self::to_info(updated))
    }

    /// Picking a career resets onboarding so the next step regenerates a
    /// roadmap for the new target. An empty choice clears the selection.
    pub fn choose_career(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &CareerRequest,
    ) -> Result<ProfileInfo, AppError> {
        let target = req.target_skill.trim();
        if target.len() > 200 {
            return Err(AppError::validation(
                "Target skill must be at most 200 characters",
            ));
        }

        ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;

        let changes = UpdateProfile {
            target_skill: Some(if target.is_empty() {
                None
            } else {
                Some(target.to_string())
            }),
            onboarding_completed: Some(false),
            ..Default::default()
        };

        let updated = ProfilesRepo::update(conn, ctx.user_id, &changes)?;
        Ok(Self::to_info(updated))
    }

    /// "Start over": reopens onboarding without touching stored roadmaps,
    /// which are append-only history.
    pub fn restart(conn: &mut PgConnection, ctx: &RequestContext) -> Result<ProfileInfo, AppError> {
        ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;

        let updated = ProfilesRepo::update(
            conn,
            ctx.user_id,
            &UpdateProfile {
                onboarding_completed: Some(false),
                ..Default::default()
            },
        )?;
        Ok(Self::to_info(updated))
    }

    pub fn to_info(profile: Profile) -> ProfileInfo {
        let stage = Self::compute_stage(&profile);
        ProfileInfo {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            education_level: profile.education_level,
            existing_skills: profile.existing_skills,
            target_skill: profile.target_skill,
            weekly_hours: profile.weekly_hours,
            weekly_goal_hours: profile.weekly_goal_hours,
            onboarding_completed: profile.onboarding_completed,
            active_roadmap_id: profile.active_roadmap_id,
            stage,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }

    /// Single source of truth for the onboarding funnel position.
    pub fn compute_stage(profile: &Profile) -> ProfileStage {
        let assessment_done = profile
            .existing_skills
            .iter()
            .any(|s| s.starts_with(FINAL_ASSESSMENT_TAG));
        let career_selected = profile
            .target_skill
            .as_deref()
            .is_some_and(|t| !t.is_empty());

        if !assessment_done {
            ProfileStage::NeedsAssessment
        } else if !career_selected {
            ProfileStage::NeedsCareerChoice
        } else if !profile.onboarding_completed {
            ProfileStage::NeedsOnboarding
        } else {
            ProfileStage::Ready
        }
    }

    /// Rewrite the skills column with fresh assessment tags: prior tags are
    /// replaced, plain skill names survive.
    pub fn apply_assessment(existing_skills: &[String], answers: &[String]) -> Vec<String> {
        let mut skills = Self::plain_skills(existing_skills);

        for (i, answer) in answers.iter().enumerate() {
            skills.push(format!("{}{}: {}", ASSESSMENT_TAG_PREFIX, i + 1, answer));
        }
        skills.push(format!(
            "{}{}",
            RECOMMENDED_TAG_PREFIX,
            Self::recommended_track(&answers[0])
        ));

        skills
    }

    /// Merge onboarding skill picks with the tags already on the profile.
    /// Tags survive the merge so the funnel position stays intact; the
    /// plain skill list is replaced wholesale.
    pub fn merge_onboarding_skills(existing: &[String], selected: &[String]) -> Vec<String> {
        let mut skills: Vec<String> = existing
            .iter()
            .filter(|s| Self::is_tag(s))
            .cloned()
            .collect();
        for skill in selected {
            let trimmed = skill.trim();
            if !trimmed.is_empty() && !skills.iter().any(|s| s == trimmed) {
                skills.push(trimmed.to_string());
            }
        }
        skills
    }

    /// Skill entries with the metadata tags filtered out.
    pub fn plain_skills(skills: &[String]) -> Vec<String> {
        skills
            .iter()
            .filter(|s| !Self::is_tag(s))
            .cloned()
            .collect()
    }

    fn is_tag(entry: &str) -> bool {
        entry.starts_with(ASSESSMENT_TAG_PREFIX) || entry.starts_with(RECOMMENDED_TAG_PREFIX)
    }

    /// Deterministic track suggestion from the familiarity answer.
    pub fn recommended_track(familiarity_answer: &str) -> &'static str {
        let answer = familiarity_answer.to_lowercase();
        if answer.contains("completely new") {
            "Frontend Development"
        } else if answer.contains("tried") {
            "Full-Stack Development"
        } else {
            "Backend Development"
        }
    }
}
