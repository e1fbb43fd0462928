use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::server::error::AppResult;

/// a single post. immutable once created, only ever deleted as a whole.
/// `media_ids` point at objects in the media bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    #[serde(default)]
    pub media_ids: Vec<Uuid>,
}

pub type DynStatusRepository = Arc<dyn StatusRepository + Send + Sync>;

#[async_trait::async_trait]
pub trait StatusRepository {
    async fn list(&self) -> AppResult<Vec<Status>>;
    async fn get(&self, status_id: Uuid) -> AppResult<Status>;
    async fn create(&self, status: Status) -> AppResult<Status>;
    async fn delete(&self, status_id: Uuid) -> AppResult<Status>;
}
