use redis::{AsyncCommands, RedisResult};
use uuid::Uuid;

use crate::db::models::roadmap::SkillRoadmap;
use crate::error::AppError;

/// 活跃路线图缓存键前缀
const ACTIVE_ROADMAP_CACHE_PREFIX: &str = "active_roadmap:";

/// 缓存过期时间（秒）
const ACTIVE_ROADMAP_CACHE_TTL: u64 = 1800; // 30分钟

/// Read-through cache for the active roadmap row. The row is immutable
/// once generated, so the only invalidation point is generating a new one.
pub struct RoadmapCache {
    redis_client: redis::Client,
}

impl RoadmapCache {
    pub fn new(redis_client: &redis::Client) -> Self {
        Self {
            redis_client: redis_client.clone(),
        }
    }

    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        Ok(self.redis_client.get_multiplexed_async_connection().await?)
    }

    pub async fn cache_active(&self, user_id: Uuid, roadmap: &SkillRoadmap) -> Result<(), AppError> {
        let mut conn = self.get_connection().await?;
        let key = format!("{}{}", ACTIVE_ROADMAP_CACHE_PREFIX, user_id);

        let roadmap_json = serde_json::to_string(roadmap)
            .map_err(|e| AppError::Internal(format!("Failed to serialize roadmap: {}", e)))?;

        let _: () = conn
            .set_ex(&key, roadmap_json, ACTIVE_ROADMAP_CACHE_TTL)
            .await?;

        Ok(())
    }

    pub async fn get_active(&self, user_id: Uuid) -> Result<Option<SkillRoadmap>, AppError> {
        let mut conn = self.get_connection().await?;
        let key = format!("{}{}", ACTIVE_ROADMAP_CACHE_PREFIX, user_id);

        let roadmap_json: Option<String> = conn.get(&key).await?;

        match roadmap_json {
            Some(json) => {
                // A stale shape in the cache must never take the read path
                // down; treat it as a miss and let the database answer.
                match serde_json::from_str(&json) {
                    Ok(roadmap) => Ok(Some(roadmap)),
                    Err(e) => {
                        tracing::warn!(user_id = %user_id, error = %e, "dropping undecodable cache entry");
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }

    pub async fn invalidate(&self, user_id: Uuid) -> Result<(), AppError> {
        let mut conn = self.get_connection().await?;
        let key = format!("{}{}", ACTIVE_ROADMAP_CACHE_PREFIX, user_id);

        let _: RedisResult<i32> = conn.del(&key).await;

        Ok(())
    }
}
