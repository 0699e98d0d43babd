use std::collections::{HashMap, HashSet};

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::activity::NewLearningActivity,
    db::models::progress::{
        CompleteSkillRequest, NewSkillProgress, PhaseProgress, RoadmapProgress, SkillDetailView,
        SkillProgress, SkillProgressView, SkillQuery,
    },
    db::models::roadmap::{RoadmapData, SkillRoadmap},
    db::repositories::{activity::ActivityRepo, notes::NotesRepo, progress::ProgressRepo},
    error::AppError,
    services::{context::RequestContext, roadmaps_service::RoadmapsService},
    utils::resource_link::ResourceLink,
};

pub struct ProgressService;

impl ProgressService {
    /// Ensure a progress row exists for every skill the document names.
    /// Safe to call on every read: regenerated documents gain rows for
    /// their new skills and rows for removed skills are left alone.
    pub fn backfill(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap_id: Uuid,
        data: &RoadmapData,
    ) -> Result<Vec<SkillProgress>, AppError> {
        let existing = ProgressRepo::list_for_roadmap(conn, ctx.user_id, roadmap_id)?;
        let missing = Self::missing_rows(ctx.user_id, roadmap_id, data, &existing);
        if missing.is_empty() {
            return Ok(existing);
        }
        ProgressRepo::insert_missing(conn, &missing)?;
        Ok(ProgressRepo::list_for_roadmap(conn, ctx.user_id, roadmap_id)?)
    }

    /// Set difference between the document's (phase, skill) pairs and the
    /// rows already stored.
    pub fn missing_rows(
        uid: Uuid,
        rid: Uuid,
        data: &RoadmapData,
        existing: &[SkillProgress],
    ) -> Vec<NewSkillProgress> {
        let have: HashSet<(&str, &str)> = existing
            .iter()
            .map(|row| (row.phase.as_str(), row.skill_name.as_str()))
            .collect();

        data.skill_keys()
            .into_iter()
            .filter(|(phase, skill)| !have.contains(&(phase.as_str(), skill.as_str())))
            .map(|(phase, skill_name)| NewSkillProgress {
                user_id: uid,
                roadmap_id: rid,
                phase,
                skill_name,
                completed: false,
            })
            .collect()
    }

    pub fn progress(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
    ) -> Result<RoadmapProgress, AppError> {
        let mut data = RoadmapsService::parse_document(roadmap)?;
        data.normalize(roadmap.schema_version);
        // A failed backfill downgrades the read to whatever rows exist;
        // completion mutations still insist on backfilled rows.
        let rows = match Self::backfill(conn, ctx, roadmap.id, &data) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(roadmap_id = %roadmap.id, error = %e, "progress backfill failed, rendering stored rows");
                ProgressRepo::list_for_roadmap(conn, ctx.user_id, roadmap.id)?
            }
        };
        Ok(Self::build_view(roadmap.id, &data, &rows))
    }

    /// Assemble the per-phase view with the unlock chain applied. The first
    /// skill is always unlocked; each later skill unlocks when the skill
    /// directly before it (across phase boundaries) is completed.
    pub fn build_view(
        roadmap_id: Uuid,
        data: &RoadmapData,
        rows: &[SkillProgress],
    ) -> RoadmapProgress {
        let by_key: HashMap<(&str, &str), &SkillProgress> = rows
            .iter()
            .map(|row| ((row.phase.as_str(), row.skill_name.as_str()), row))
            .collect();

        let mut previous_completed = true;
        let mut completed_skills = 0usize;
        let mut phases = Vec::with_capacity(data.phases.len());

        for phase in &data.phases {
            let mut skills = Vec::with_capacity(phase.skills.len());
            let mut phase_completed = 0usize;

            for skill in &phase.skills {
                let row = by_key.get(&(phase.name.as_str(), skill.name.as_str()));
                let completed = row.is_some_and(|r| r.completed);
                if completed {
                    completed_skills += 1;
                    phase_completed += 1;
                }
                skills.push(SkillProgressView {
                    name: skill.name.clone(),
                    completed,
                    locked: !previous_completed,
                    has_quiz: !skill.quiz.is_empty(),
                    time_estimate: skill.days.clone(),
                    completed_at: row.and_then(|r| r.completed_at),
                });
                previous_completed = completed;
            }

            phases.push(PhaseProgress {
                name: phase.name.clone(),
                completion_percent: Self::percent(phase_completed, phase.skills.len()),
                skills,
            });
        }

        let total_skills = data.skill_count();
        RoadmapProgress {
            roadmap_id,
            total_skills,
            completed_skills,
            overall_percent: Self::percent(completed_skills, total_skills),
            phases,
        }
    }

    /// Manual completion, only for skills without a quiz. Quiz-bearing
    /// skills complete through quiz submission.
    pub fn complete_skill(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
        req: &CompleteSkillRequest,
    ) -> Result<SkillProgress, AppError> {
        let data = RoadmapsService::parse_document(roadmap)?;
        let skill = data
            .find_skill(&req.phase, &req.skill_name)
            .ok_or_else(|| AppError::not_found("Skill"))?;
        if !skill.quiz.is_empty() {
            return Err(AppError::QuizRequired);
        }
        Self::complete_unlocked(conn, ctx, roadmap.id, &data, &req.phase, &req.skill_name)
    }

    /// Shared completion path for manual completes and quiz passes: backfill,
    /// enforce the unlock chain, then flip the row. Completing an already
    /// completed skill is a no-op success, not an error.
    pub fn complete_unlocked(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap_id: Uuid,
        data: &RoadmapData,
        phase: &str,
        skill_name: &str,
    ) -> Result<SkillProgress, AppError> {
        let rows = Self::backfill(conn, ctx, roadmap_id, data)?;

        if Self::is_locked(data, &rows, phase, skill_name) {
            return Err(AppError::SkillLocked);
        }

        if let Some(row) = rows
            .iter()
            .find(|r| r.phase == phase && r.skill_name == skill_name)
        {
            if row.completed {
                return Ok(row.clone());
            }
        }

        let now = Utc::now();
        let row = ProgressRepo::mark_complete(conn, ctx.user_id, roadmap_id, phase, skill_name, now)?;

        // Count the completion toward today's activity. Minutes stay zero;
        // study time is reported separately by the client.
        ActivityRepo::upsert_increment(
            conn,
            &NewLearningActivity {
                user_id: ctx.user_id,
                date: now.date_naive(),
                minutes_spent: 0,
                skills_completed: 1,
            },
            now,
        )?;

        tracing::info!(
            user_id = %ctx.user_id,
            roadmap_id = %roadmap_id,
            phase = %phase,
            skill = %skill_name,
            "skill completed"
        );
        Ok(row)
    }

    /// A skill is locked when its predecessor in document order is not
    /// completed. Position zero is never locked. Unknown skills report
    /// unlocked here; existence is checked before this runs.
    pub fn is_locked(
        data: &RoadmapData,
        rows: &[SkillProgress],
        phase: &str,
        skill_name: &str,
    ) -> bool {
        let keys = data.skill_keys();
        let Some(pos) = keys
            .iter()
            .position(|(p, s)| p == phase && s == skill_name)
        else {
            return false;
        };
        if pos == 0 {
            return false;
        }

        let (prev_phase, prev_skill) = &keys[pos - 1];
        !rows
            .iter()
            .any(|r| r.phase == *prev_phase && r.skill_name == *prev_skill && r.completed)
    }

    pub fn skill_detail(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
        query: &SkillQuery,
    ) -> Result<SkillDetailView, AppError> {
        let mut data = RoadmapsService::parse_document(roadmap)?;
        data.normalize(roadmap.schema_version);

        let skill = data
            .find_skill(&query.phase, &query.skill_name)
            .ok_or_else(|| AppError::not_found("Skill"))?;

        let rows = Self::backfill(conn, ctx, roadmap.id, &data)?;
        let row = rows
            .iter()
            .find(|r| r.phase == query.phase && r.skill_name == query.skill_name);
        let note = NotesRepo::find(conn, ctx.user_id, roadmap.id, &query.phase, &query.skill_name)?;

        Ok(SkillDetailView {
            roadmap_id: roadmap.id,
            phase: query.phase.clone(),
            name: skill.name.clone(),
            description: skill.description.clone(),
            time_estimate: skill.days.clone(),
            completed: row.is_some_and(|r| r.completed),
            locked: Self::is_locked(&data, &rows, &query.phase, &query.skill_name),
            quiz_question_count: skill.quiz.len(),
            resources: skill
                .resources
                .iter()
                .map(|raw| ResourceLink::parse(raw, &skill.name))
                .collect(),
            weak_points: skill.weak_points.clone(),
            note: note.map(|n| n.content),
        })
    }

    /// Whole-number percentage, rounded half-up, zero when there is nothing
    /// to count. Every completion figure in the API uses this rounding.
    pub fn percent(completed: usize, total: usize) -> i32 {
        if total == 0 {
            return 0;
        }
        ((completed as f64 / total as f64) * 100.0).round() as i32
    }
}
