use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::models::note::{NewSkillNote, NoteView, SaveNoteRequest},
    db::models::progress::SkillQuery,
    db::models::roadmap::SkillRoadmap,
    db::repositories::notes::NotesRepo,
    error::AppError,
    services::{context::RequestContext, roadmaps_service::RoadmapsService},
};

pub struct NotesService;

impl NotesService {
    /// A missing note reads back as empty content rather than 404 so the
    /// editor can open blank.
    pub fn get(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
        query: &SkillQuery,
    ) -> Result<NoteView, AppError> {
        let note = NotesRepo::find(conn, ctx.user_id, roadmap.id, &query.phase, &query.skill_name)?;
        Ok(match note {
            Some(note) => NoteView {
                content: note.content,
                updated_at: Some(note.updated_at),
            },
            None => NoteView {
                content: String::new(),
                updated_at: None,
            },
        })
    }

    /// Notes attach to skills the document actually contains; anything else
    /// is a stale client and gets a 404.
    pub fn save(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        roadmap: &SkillRoadmap,
        req: &SaveNoteRequest,
    ) -> Result<NoteView, AppError> {
        let data = RoadmapsService::parse_document(roadmap)?;
        if data.find_skill(&req.phase, &req.skill_name).is_none() {
            return Err(AppError::not_found("Skill"));
        }

        let saved = NotesRepo::upsert(
            conn,
            &NewSkillNote {
                user_id: ctx.user_id,
                roadmap_id: roadmap.id,
                skill_name: req.skill_name.clone(),
                phase: req.phase.clone(),
                content: req.content.clone(),
            },
            Utc::now(),
        )?;

        Ok(NoteView {
            content: saved.content,
            updated_at: Some(saved.updated_at),
        })
    }
}
