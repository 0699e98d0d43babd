use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::progress::{NewSkillProgress, SkillProgress};

pub struct ProgressRepo;

impl ProgressRepo {
    pub fn list_for_roadmap(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
    ) -> Result<Vec<SkillProgress>, diesel::result::Error> {
        use crate::schema::skill_progress::dsl::*;
        skill_progress
            .filter(user_id.eq(uid))
            .filter(roadmap_id.eq(rid))
            .load::<SkillProgress>(conn)
    }

    /// Backfill insert. The unique key on (user, roadmap, phase, skill)
    /// makes this idempotent: rows that already exist are skipped.
    pub fn insert_missing(
        conn: &mut PgConnection,
        rows: &[NewSkillProgress],
    ) -> Result<usize, diesel::result::Error> {
        if rows.is_empty() {
            return Ok(0);
        }
        diesel::insert_into(crate::schema::skill_progress::table)
            .values(rows)
            .on_conflict_do_nothing()
            .execute(conn)
    }

    pub fn mark_complete(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
        phase_name: &str,
        skill: &str,
        completed_time: chrono::DateTime<chrono::Utc>,
    ) -> Result<SkillProgress, diesel::result::Error> {
        use crate::schema::skill_progress::dsl::*;
        diesel::update(
            skill_progress
                .filter(user_id.eq(uid))
                .filter(roadmap_id.eq(rid))
                .filter(phase.eq(phase_name))
                .filter(skill_name.eq(skill)),
        )
        .set((completed.eq(true), completed_at.eq(Some(completed_time))))
        .get_result(conn)
    }

    pub fn count_completed(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::skill_progress::dsl::*;
        skill_progress
            .filter(user_id.eq(uid))
            .filter(roadmap_id.eq(rid))
            .filter(completed.eq(true))
            .count()
            .get_result(conn)
    }
}
