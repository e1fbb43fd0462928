use axum::{Extension, Json, Router, extract::Path, routing::get};
use uuid::Uuid;

use crate::server::dtos::timeline_dto::TimelineResponse;
use crate::server::error::AppResult;
use crate::server::services::app_services::AppServices;

pub struct TimelineController;

impl TimelineController {
    pub fn app() -> Router {
        Router::new().route("/{user_id}", get(Self::get_timeline))
    }

    /// a user that nobody posted to yet simply has no timeline, that's a 404
    async fn get_timeline(
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<TimelineResponse>> {
        let timeline = services.timelines.get_timeline(user_id).await?;

        Ok(Json(TimelineResponse::from(timeline)))
    }
}
