use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::database::pubsub::DynEventPublisher;
use crate::database::status::{DynStatusRepository, Status};
use crate::server::error::AppResult;

pub type DynStatusService = Arc<dyn StatusServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait StatusServiceTrait {
    async fn get_statuses(&self, user_id: Option<Uuid>) -> AppResult<Vec<Status>>;
    async fn get_status(&self, status_id: Uuid) -> AppResult<Status>;
    async fn create_status(&self, status: Status) -> AppResult<Status>;
    async fn delete_status(&self, status_id: Uuid) -> AppResult<Status>;
}

pub struct StatusService {
    repository: DynStatusRepository,
    publisher: DynEventPublisher,
    topic: String,
}

impl StatusService {
    pub fn new(repository: DynStatusRepository, publisher: DynEventPublisher, topic: String) -> Self {
        Self {
            repository,
            publisher,
            topic,
        }
    }
}

#[async_trait]
impl StatusServiceTrait for StatusService {
    async fn get_statuses(&self, user_id: Option<Uuid>) -> AppResult<Vec<Status>> {
        let all_statuses = self.repository.list().await?;

        Ok(match user_id {
            Some(user_id) => all_statuses
                .into_iter()
                .filter(|status| status.user_id == user_id)
                .collect(),
            None => all_statuses,
        })
    }

    async fn get_status(&self, status_id: Uuid) -> AppResult<Status> {
        self.repository.get(status_id).await
    }

    /// persists first, then announces. a failed publish surfaces as an error
    /// even though the status is already stored.
    async fn create_status(&self, status: Status) -> AppResult<Status> {
        let created = self.repository.create(status).await?;

        self.publisher
            .publish(&self.topic, serde_json::to_string(&created)?)
            .await?;

        info!("created status {} by {}", created.id, created.user_id);
        Ok(created)
    }

    async fn delete_status(&self, status_id: Uuid) -> AppResult<Status> {
        self.repository.delete(status_id).await
    }
}
