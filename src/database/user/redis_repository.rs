use std::sync::Arc;

use redis::AsyncCommands;
use uuid::Uuid;

use crate::database::RedisDatabase;
use crate::database::user::model::{User, UserRepository};
use crate::server::error::{AppResult, Error};

const USER_INDEX_KEY: &str = "user:ids";

pub struct RedisUserRepo {
    redis: Arc<RedisDatabase>,
}

impl RedisUserRepo {
    pub fn new(redis: Arc<RedisDatabase>) -> Self {
        Self { redis }
    }

    fn user_key(&self, user_id: Uuid) -> String {
        format!("user:{}", user_id)
    }
}

#[async_trait::async_trait]
impl UserRepository for RedisUserRepo {
    async fn list(&self) -> AppResult<Vec<User>> {
        let mut conn = self.redis.connection.clone();

        let ids: Vec<String> = conn.smembers(USER_INDEX_KEY).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| format!("user:{}", id)).collect();
        let values: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut all_users = Vec::with_capacity(values.len());
        for value in values.into_iter().flatten() {
            all_users.push(serde_json::from_str(&value)?);
        }

        Ok(all_users)
    }

    async fn get(&self, user_id: Uuid) -> AppResult<User> {
        let mut conn = self.redis.connection.clone();

        let value: Option<String> = conn.get(self.user_key(user_id)).await?;
        let value = value.ok_or(Error::NotFound(user_id))?;

        Ok(serde_json::from_str(&value)?)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let payload = serde_json::to_string(&user)?;
        let mut conn = self.redis.connection.clone();

        let result: Result<(), redis::RedisError> = redis::pipe()
            .atomic()
            .set(self.user_key(user.id), payload)
            .ignore()
            .sadd(USER_INDEX_KEY, user.id.to_string())
            .ignore()
            .query_async(&mut conn)
            .await;
        result?;

        Ok(user)
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<User> {
        let user = self.get(user_id).await?;
        let mut conn = self.redis.connection.clone();

        let result: Result<(), redis::RedisError> = redis::pipe()
            .atomic()
            .del(self.user_key(user_id))
            .ignore()
            .srem(USER_INDEX_KEY, user_id.to_string())
            .ignore()
            .query_async(&mut conn)
            .await;
        result?;

        Ok(user)
    }
}
