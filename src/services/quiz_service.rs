use std::collections::BTreeMap;

use diesel::prelude::*;

use crate::{
    db::models::progress::{QuizResult, QuizSubmissionRequest},
    db::models::roadmap::{QuizQuestion, SkillRoadmap},
    error::AppError,
    services::{context::RequestContext, progress_service::ProgressService},
    services::roadmaps_service::RoadmapsService,
};

pub struct QuizService;

impl QuizService {
    /// Grade a submission and, on a pass, complete the skill through the
    /// regular unlock-checked path. A locked skill rejects the submission
    /// before grading so no answers leak through the error.
    pub fn submit(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
        req: &QuizSubmissionRequest,
    ) -> Result<QuizResult, AppError> {
        let data = RoadmapsService::parse_document(roadmap)?;
        let skill = data
            .find_skill(&req.phase, &req.skill_name)
            .ok_or_else(|| AppError::not_found("Skill"))?;
        if skill.quiz.is_empty() {
            return Err(AppError::validation("This skill has no quiz"));
        }

        let rows = ProgressService::backfill(conn, ctx, roadmap.id, &data)?;
        if ProgressService::is_locked(&data, &rows, &req.phase, &req.skill_name) {
            return Err(AppError::SkillLocked);
        }

        let result = Self::evaluate(&skill.quiz, &req.answers)?;
        if result.passed {
            ProgressService::complete_unlocked(
                conn,
                ctx,
                roadmap.id,
                &data,
                &req.phase,
                &req.skill_name,
            )?;
        }

        tracing::info!(
            user_id = %ctx.user_id,
            roadmap_id = %roadmap.id,
            skill = %req.skill_name,
            score = result.score,
            total = result.total,
            passed = result.passed,
            "quiz graded"
        );
        Ok(result)
    }

    /// Pure grading. Every question must be answered before anything is
    /// scored; a partial submission is rejected outright rather than graded
    /// as zero on the gaps.
    pub fn evaluate(
        quiz: &[QuizQuestion],
        answers: &BTreeMap<usize, usize>,
    ) -> Result<QuizResult, AppError> {
        let total = quiz.len();
        if (0..total).any(|i| !answers.contains_key(&i)) {
            return Err(AppError::IncompleteSubmission);
        }

        let score = quiz
            .iter()
            .enumerate()
            .filter(|(i, question)| answers.get(i) == Some(&question.correct_answer))
            .count();
        let threshold = Self::pass_threshold(total);

        Ok(QuizResult {
            passed: score >= threshold,
            score,
            total,
            threshold,
        })
    }

    /// Two thirds of the questions, rounded up: three questions need two
    /// correct, four need three.
    pub fn pass_threshold(total: usize) -> usize {
        (total * 2).div_ceil(3)
    }
}
