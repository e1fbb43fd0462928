use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::database::timeline::model::{Timeline, TimelineRepository};
use crate::server::error::{AppResult, Error};

#[derive(Default)]
pub struct InMemoryTimelineRepo {
    timelines: Mutex<HashMap<Uuid, Timeline>>,
}

impl InMemoryTimelineRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TimelineRepository for InMemoryTimelineRepo {
    async fn get(&self, user_id: Uuid) -> AppResult<Timeline> {
        let timelines = self.timelines.lock().unwrap();
        timelines
            .get(&user_id)
            .cloned()
            .ok_or(Error::NotFound(user_id))
    }

    async fn save(&self, timeline: Timeline) -> AppResult<Timeline> {
        let mut timelines = self.timelines.lock().unwrap();
        timelines.insert(timeline.user_id, timeline.clone());
        Ok(timeline)
    }
}
