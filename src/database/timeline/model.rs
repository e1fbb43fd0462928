use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::database::status::Status;
use crate::server::error::AppResult;

/// per-user cache of statuses from everyone the user follows. rebuilt by the
/// fan-out consumer, append-only otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub user_id: Uuid,
    pub statuses: Vec<Status>,
}

/// published on the timeline topic after a fan-out pass finishes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub status_id: Uuid,
    pub timelines_updated: usize,
}

pub type DynTimelineRepository = Arc<dyn TimelineRepository + Send + Sync>;

#[async_trait::async_trait]
pub trait TimelineRepository {
    async fn get(&self, user_id: Uuid) -> AppResult<Timeline>;
    async fn save(&self, timeline: Timeline) -> AppResult<Timeline>;
}
