use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::roadmap::{NewSkillRoadmap, SkillRoadmap};

pub struct RoadmapsRepo;

impl RoadmapsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_roadmap: &NewSkillRoadmap,
    ) -> Result<SkillRoadmap, diesel::result::Error> {
        diesel::insert_into(crate::schema::skill_roadmaps::table)
            .values(new_roadmap)
            .get_result(conn)
    }

    pub fn find_by_id_for_user(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
    ) -> Result<Option<SkillRoadmap>, diesel::result::Error> {
        use crate::schema::skill_roadmaps::dsl::*;
        skill_roadmaps
            .filter(id.eq(rid))
            .filter(user_id.eq(uid))
            .first::<SkillRoadmap>(conn)
            .optional()
    }

    /// Fallback for profiles that predate the explicit active-roadmap
    /// pointer: most recently generated wins.
    pub fn latest_for_user(
        conn: &mut PgConnection,
        uid: Uuid,
    ) -> Result<Option<SkillRoadmap>, diesel::result::Error> {
        use crate::schema::skill_roadmaps::dsl::*;
        skill_roadmaps
            .filter(user_id.eq(uid))
            .order(created_at.desc())
            .first::<SkillRoadmap>(conn)
            .optional()
    }

    pub fn list_for_user(
        conn: &mut PgConnection,
        uid: Uuid,
    ) -> Result<Vec<SkillRoadmap>, diesel::result::Error> {
        use crate::schema::skill_roadmaps::dsl::*;
        skill_roadmaps
            .filter(user_id.eq(uid))
            .order(created_at.desc())
            .load::<SkillRoadmap>(conn)
    }
}
