use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::database::status::Status;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatusRequest {
    #[validate(length(min = 1, max = 500))]
    pub content: String,
    pub user_id: Uuid,
    pub media_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub media_ids: Vec<Uuid>,
}

impl From<Status> for StatusResponse {
    fn from(status: Status) -> Self {
        Self {
            id: status.id,
            content: status.content,
            user_id: status.user_id,
            media_ids: status.media_ids,
        }
    }
}

impl From<CreateStatusRequest> for Status {
    fn from(request: CreateStatusRequest) -> Self {
        Status {
            id: Uuid::new_v4(),
            content: request.content,
            user_id: request.user_id,
            media_ids: request.media_ids.unwrap_or_default(),
        }
    }
}
