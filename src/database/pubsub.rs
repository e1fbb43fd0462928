use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use futures::StreamExt;
use mockall::automock;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::database::RedisDatabase;
use crate::server::error::AppResult;

/// message on the media topic, names the object the uploader stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEvent {
    pub media_id: String,
}

pub type DynEventPublisher = Arc<dyn EventPublisher + Send + Sync>;

#[automock]
#[async_trait]
pub trait EventPublisher {
    async fn publish(&self, topic: &str, payload: String) -> AppResult<()>;
}

pub struct RedisEventPublisher {
    redis: Arc<RedisDatabase>,
}

impl RedisEventPublisher {
    pub fn new(redis: Arc<RedisDatabase>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, topic: &str, payload: String) -> AppResult<()> {
        let mut conn = self.redis.connection.clone();

        // number of receivers, only interesting for debugging
        let receivers: i64 = conn.publish(topic, payload).await?;
        debug!("published to {} ({} receivers)", topic, receivers);

        Ok(())
    }
}

/// consumes one pub/sub channel on its own dedicated connection. a multiplexed
/// connection can't subscribe, so this opens a fresh one from the client.
pub struct TopicSubscriber {
    client: redis::Client,
    topic: String,
}

impl TopicSubscriber {
    pub fn new(redis_url: &str, topic: &str) -> anyhow::Result<Self> {
        let client =
            redis::Client::open(redis_url).context("Failed to create Redis pub/sub client")?;

        Ok(Self {
            client,
            topic: topic.to_string(),
        })
    }

    /// blocks on the subscription until the connection drops. payloads that
    /// can't be read are skipped, everything else goes to the handler.
    pub async fn run<F, Fut>(self, handler: F) -> anyhow::Result<()>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut pubsub = self
            .client
            .get_async_pubsub()
            .await
            .context("Failed to open pub/sub connection")?;

        pubsub
            .subscribe(&self.topic)
            .await
            .with_context(|| format!("Failed to subscribe to {}", self.topic))?;

        info!("subscribed to topic {}", self.topic);

        let mut stream = pubsub.on_message();
        while let Some(message) = stream.next().await {
            let payload: String = match message.get_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    error!("unreadable message on {}: {}", self.topic, e);
                    continue;
                }
            };

            handler(payload).await;
        }

        Ok(())
    }
}
