use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::database::media_store::DynMediaStore;
use crate::database::pubsub::{DynEventPublisher, MediaEvent};
use crate::server::error::AppResult;
use crate::server::utils::media_format_utils::MediaFormat;

/// how long a download redirect stays valid
const PRESIGN_TTL: Duration = Duration::from_secs(600);

pub type DynMediaService = Arc<dyn MediaServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait MediaServiceTrait {
    /// stores the blob under `<uuid>.<ext>` and announces it for conversion
    async fn upload(&self, format: MediaFormat, data: Vec<u8>) -> AppResult<String>;
    async fn download_url(&self, media_id: &str) -> AppResult<String>;
}

pub struct MediaService {
    store: DynMediaStore,
    publisher: DynEventPublisher,
    topic: String,
}

impl MediaService {
    pub fn new(store: DynMediaStore, publisher: DynEventPublisher, topic: String) -> Self {
        Self {
            store,
            publisher,
            topic,
        }
    }
}

#[async_trait]
impl MediaServiceTrait for MediaService {
    async fn upload(&self, format: MediaFormat, data: Vec<u8>) -> AppResult<String> {
        let media_id = format!("{}.{}", Uuid::new_v4(), format.extension());

        self.store.create(&media_id, data).await?;

        let event = MediaEvent {
            media_id: media_id.clone(),
        };
        self.publisher
            .publish(&self.topic, serde_json::to_string(&event)?)
            .await?;

        info!("uploaded media {}", media_id);
        Ok(media_id)
    }

    async fn download_url(&self, media_id: &str) -> AppResult<String> {
        Ok(self.store.presign_get(media_id, PRESIGN_TTL).await?)
    }
}
