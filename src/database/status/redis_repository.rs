use std::sync::Arc;

use redis::AsyncCommands;
use uuid::Uuid;

use crate::database::RedisDatabase;
use crate::database::status::model::{Status, StatusRepository};
use crate::server::error::{AppResult, Error};

/// key per status plus a set of all ids so list() doesn't have to SCAN
const STATUS_INDEX_KEY: &str = "status:ids";

pub struct RedisStatusRepo {
    redis: Arc<RedisDatabase>,
}

impl RedisStatusRepo {
    pub fn new(redis: Arc<RedisDatabase>) -> Self {
        Self { redis }
    }

    fn status_key(&self, status_id: Uuid) -> String {
        format!("status:{}", status_id)
    }
}

#[async_trait::async_trait]
impl StatusRepository for RedisStatusRepo {
    async fn list(&self) -> AppResult<Vec<Status>> {
        let mut conn = self.redis.connection.clone();

        let ids: Vec<String> = conn.smembers(STATUS_INDEX_KEY).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| format!("status:{}", id)).collect();
        let values: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut all_statuses = Vec::with_capacity(values.len());
        for value in values.into_iter().flatten() {
            all_statuses.push(serde_json::from_str(&value)?);
        }

        Ok(all_statuses)
    }

    async fn get(&self, status_id: Uuid) -> AppResult<Status> {
        let mut conn = self.redis.connection.clone();

        let value: Option<String> = conn.get(self.status_key(status_id)).await?;
        let value = value.ok_or(Error::NotFound(status_id))?;

        Ok(serde_json::from_str(&value)?)
    }

    async fn create(&self, status: Status) -> AppResult<Status> {
        let payload = serde_json::to_string(&status)?;
        let mut conn = self.redis.connection.clone();

        // value and index entry have to land together
        let result: Result<(), redis::RedisError> = redis::pipe()
            .atomic()
            .set(self.status_key(status.id), payload)
            .ignore()
            .sadd(STATUS_INDEX_KEY, status.id.to_string())
            .ignore()
            .query_async(&mut conn)
            .await;
        result?;

        Ok(status)
    }

    async fn delete(&self, status_id: Uuid) -> AppResult<Status> {
        let status = self.get(status_id).await?;
        let mut conn = self.redis.connection.clone();

        let result: Result<(), redis::RedisError> = redis::pipe()
            .atomic()
            .del(self.status_key(status_id))
            .ignore()
            .srem(STATUS_INDEX_KEY, status_id.to_string())
            .ignore()
            .query_async(&mut conn)
            .await;
        result?;

        Ok(status)
    }
}
