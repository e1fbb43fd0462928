use serde::Serialize;
use uuid::Uuid;

use crate::database::timeline::Timeline;
use crate::server::dtos::status_dto::StatusResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub id: Uuid,
    pub statuses: Vec<StatusResponse>,
}

impl From<Timeline> for TimelineResponse {
    fn from(timeline: Timeline) -> Self {
        Self {
            id: timeline.user_id,
            statuses: timeline
                .statuses
                .into_iter()
                .map(StatusResponse::from)
                .collect(),
        }
    }
}
