use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Version tag stored alongside every roadmap document. Normalization
/// branches on this instead of sniffing fields.
///
/// `v1` is the legacy shape (level-named phases, `estimatedTime`, no
/// quizzes). `v2` is the canonical shape (`days`, resources, embedded
/// quizzes). Generation always writes `v2`; `v1` exists for rows that
/// predate the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapSchemaVersion {
    V1,
    V2,
}

impl FromSql<Text, Pg> for RoadmapSchemaVersion {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "v1" => Ok(RoadmapSchemaVersion::V1),
            "v2" => Ok(RoadmapSchemaVersion::V2),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for RoadmapSchemaVersion {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            RoadmapSchemaVersion::V1 => out.write_all(b"v1")?,
            RoadmapSchemaVersion::V2 => out.write_all(b"v2")?,
        }
        Ok(IsNull::No)
    }
}
