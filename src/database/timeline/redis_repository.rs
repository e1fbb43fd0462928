use std::sync::Arc;

use redis::AsyncCommands;
use uuid::Uuid;

use crate::database::RedisDatabase;
use crate::database::timeline::model::{Timeline, TimelineRepository};
use crate::server::error::{AppResult, Error};

/// keyed by timeline owner, no index set since timelines are only ever
/// fetched for a known user
pub struct RedisTimelineRepo {
    redis: Arc<RedisDatabase>,
}

impl RedisTimelineRepo {
    pub fn new(redis: Arc<RedisDatabase>) -> Self {
        Self { redis }
    }

    fn timeline_key(&self, user_id: Uuid) -> String {
        format!("timeline:{}", user_id)
    }
}

#[async_trait::async_trait]
impl TimelineRepository for RedisTimelineRepo {
    async fn get(&self, user_id: Uuid) -> AppResult<Timeline> {
        let mut conn = self.redis.connection.clone();

        let value: Option<String> = conn.get(self.timeline_key(user_id)).await?;
        let value = value.ok_or(Error::NotFound(user_id))?;

        Ok(serde_json::from_str(&value)?)
    }

    async fn save(&self, timeline: Timeline) -> AppResult<Timeline> {
        let payload = serde_json::to_string(&timeline)?;
        let mut conn = self.redis.connection.clone();

        let _: () = conn.set(self.timeline_key(timeline.user_id), payload).await?;

        Ok(timeline)
    }
}
