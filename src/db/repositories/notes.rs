use diesel::prelude::*;
use diesel::upsert::excluded;
use uuid::Uuid;

use crate::db::models::note::{NewSkillNote, SkillNote};

pub struct NotesRepo;

impl NotesRepo {
    pub fn find(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
        phase_name: &str,
        skill: &str,
    ) -> Result<Option<SkillNote>, diesel::result::Error> {
        use crate::schema::skill_notes::dsl::*;
        skill_notes
            .filter(user_id.eq(uid))
            .filter(roadmap_id.eq(rid))
            .filter(phase.eq(phase_name))
            .filter(skill_name.eq(skill))
            .first::<SkillNote>(conn)
            .optional()
    }

    /// One note per (user, roadmap, skill, phase); saving again replaces
    /// the content in place.
    pub fn upsert(
        conn: &mut PgConnection,
        new_note: &NewSkillNote,
        saved_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<SkillNote, diesel::result::Error> {
        use crate::schema::skill_notes::dsl::*;
        diesel::insert_into(skill_notes)
            .values(new_note)
            .on_conflict((user_id, roadmap_id, skill_name, phase))
            .do_update()
            .set((content.eq(excluded(content)), updated_at.eq(saved_at)))
            .get_result(conn)
    }
}
