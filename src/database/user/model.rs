use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::error::AppResult;

/// follower/followee adjacency is stored on both sides. the follower service
/// is responsible for keeping `b in a.followers <=> a in b.followees` true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub followers: HashSet<Uuid>,
    #[serde(default)]
    pub followees: HashSet<Uuid>,
}

impl User {
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            followers: HashSet::new(),
            followees: HashSet::new(),
        }
    }
}

pub type DynUserRepository = Arc<dyn UserRepository + Send + Sync>;

#[async_trait::async_trait]
pub trait UserRepository {
    async fn list(&self) -> AppResult<Vec<User>>;
    async fn get(&self, user_id: Uuid) -> AppResult<User>;
    /// upsert, follow/unfollow rewrites existing users through this
    async fn save(&self, user: User) -> AppResult<User>;
    async fn delete(&self, user_id: Uuid) -> AppResult<User>;
}
