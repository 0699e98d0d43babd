use diesel::prelude::*;
use diesel::upsert::excluded;
use uuid::Uuid;

use crate::db::models::activity::{LearningActivity, NewLearningActivity};

pub struct ActivityRepo;

impl ActivityRepo {
    /// Append-or-increment on (user, date): the first record of a day
    /// inserts, later records add onto the same row.
    pub fn upsert_increment(
        conn: &mut PgConnection,
        record: &NewLearningActivity,
        recorded_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<LearningActivity, diesel::result::Error> {
        use crate::schema::learning_activity::dsl::*;
        diesel::insert_into(learning_activity)
            .values(record)
            .on_conflict((user_id, date))
            .do_update()
            .set((
                minutes_spent.eq(minutes_spent + excluded(minutes_spent)),
                skills_completed.eq(skills_completed + excluded(skills_completed)),
                updated_at.eq(recorded_at),
            ))
            .get_result(conn)
    }

    pub fn list_desc(
        conn: &mut PgConnection,
        uid: Uuid,
    ) -> Result<Vec<LearningActivity>, diesel::result::Error> {
        use crate::schema::learning_activity::dsl::*;
        learning_activity
            .filter(user_id.eq(uid))
            .order(date.desc())
            .load::<LearningActivity>(conn)
    }
}
