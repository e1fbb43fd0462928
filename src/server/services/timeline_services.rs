use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;
use uuid::Uuid;

use crate::database::pubsub::DynEventPublisher;
use crate::database::status::Status;
use crate::database::timeline::{DynTimelineRepository, Timeline, TimelineEvent};
use crate::server::error::{AppResult, Error};
use crate::server::services::follower_services::DynFollowerService;

pub type DynTimelineService = Arc<dyn TimelineServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait TimelineServiceTrait {
    async fn get_timeline(&self, user_id: Uuid) -> AppResult<Timeline>;
    /// fan-out: append `status` to the cached timeline of every follower of
    /// `user_id`
    async fn update_timelines(&self, user_id: Uuid, status: Status) -> AppResult<()>;
}

pub struct TimelineService {
    repository: DynTimelineRepository,
    followers: DynFollowerService,
    publisher: DynEventPublisher,
    topic: String,
}

impl TimelineService {
    pub fn new(
        repository: DynTimelineRepository,
        followers: DynFollowerService,
        publisher: DynEventPublisher,
        topic: String,
    ) -> Self {
        Self {
            repository,
            followers,
            publisher,
            topic,
        }
    }
}

#[async_trait]
impl TimelineServiceTrait for TimelineService {
    async fn get_timeline(&self, user_id: Uuid) -> AppResult<Timeline> {
        self.repository.get(user_id).await
    }

    /// a failed save aborts the loop and surfaces the error. timelines saved
    /// before that point keep the status, there is no rollback. redelivery of
    /// the same status appends it again, the cache has no idempotency guard.
    async fn update_timelines(&self, user_id: Uuid, status: Status) -> AppResult<()> {
        let all_followers = self.followers.get_followers(user_id).await?;

        for follower in &all_followers {
            let timeline = match self.repository.get(follower.id).await {
                Ok(mut timeline) => {
                    timeline.statuses.push(status.clone());
                    timeline
                }
                Err(Error::NotFound(_)) => Timeline {
                    user_id: follower.id,
                    statuses: vec![status.clone()],
                },
                Err(e) => return Err(e),
            };

            self.repository.save(timeline).await?;
        }

        debug!(
            "fanned status {} out to {} timelines",
            status.id,
            all_followers.len()
        );

        let event = TimelineEvent {
            status_id: status.id,
            timelines_updated: all_followers.len(),
        };
        self.publisher
            .publish(&self.topic, serde_json::to_string(&event)?)
            .await?;

        Ok(())
    }
}
