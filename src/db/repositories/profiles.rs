use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::profile::{NewProfile, Profile, UpdateProfile};

pub struct ProfilesRepo;

impl ProfilesRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        uid: Uuid,
    ) -> Result<Option<Profile>, diesel::result::Error> {
        use crate::schema::profiles::dsl::*;
        profiles.filter(id.eq(uid)).first::<Profile>(conn).optional()
    }

    /// First access creates the row. Concurrent first requests race, so the
    /// insert ignores conflicts and re-reads.
    pub fn find_or_create(
        conn: &mut PgConnection,
        uid: Uuid,
        user_email: Option<&str>,
    ) -> Result<Profile, diesel::result::Error> {
        if let Some(existing) = Self::find_by_id(conn, uid)? {
            return Ok(existing);
        }

        diesel::insert_into(crate::schema::profiles::table)
            .values(&NewProfile {
                id: uid,
                email: user_email.map(|e| e.to_string()),
                existing_skills: vec![],
            })
            .on_conflict_do_nothing()
            .execute(conn)?;

        use crate::schema::profiles::dsl::*;
        profiles.filter(id.eq(uid)).first::<Profile>(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        uid: Uuid,
        changes: &UpdateProfile,
    ) -> Result<Profile, diesel::result::Error> {
        use crate::schema::profiles::dsl::*;
        diesel::update(profiles.filter(id.eq(uid)))
            .set(changes)
            .get_result(conn)
    }

    pub fn set_active_roadmap(
        conn: &mut PgConnection,
        uid: Uuid,
        rid: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::profiles::dsl::*;
        diesel::update(profiles.filter(id.eq(uid)))
            .set(active_roadmap_id.eq(Some(rid)))
            .execute(conn)
    }
}
