use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::database::status::Status;
use crate::server::dtos::status_dto::{CreateStatusRequest, StatusResponse};
use crate::server::error::AppResult;
use crate::server::services::app_services::AppServices;

#[derive(Deserialize)]
pub struct StatusListQuery {
    user_id: Option<Uuid>,
}

pub struct StatusController;

impl StatusController {
    pub fn app() -> Router {
        Router::new()
            .route("/", get(Self::get_statuses).post(Self::create_status))
            .route(
                "/{status_id}",
                get(Self::get_status).delete(Self::delete_status),
            )
    }

    async fn get_statuses(
        Extension(services): Extension<AppServices>,
        Query(query): Query<StatusListQuery>,
    ) -> AppResult<Json<Vec<StatusResponse>>> {
        let statuses = services.statuses.get_statuses(query.user_id).await?;

        Ok(Json(
            statuses.into_iter().map(StatusResponse::from).collect(),
        ))
    }

    async fn get_status(
        Extension(services): Extension<AppServices>,
        Path(status_id): Path<Uuid>,
    ) -> AppResult<Json<StatusResponse>> {
        let status = services.statuses.get_status(status_id).await?;

        Ok(Json(StatusResponse::from(status)))
    }

    async fn create_status(
        Extension(services): Extension<AppServices>,
        Json(request): Json<CreateStatusRequest>,
    ) -> AppResult<(StatusCode, Json<StatusResponse>)> {
        request.validate()?;

        let status = services.statuses.create_status(Status::from(request)).await?;

        Ok((StatusCode::CREATED, Json(StatusResponse::from(status))))
    }

    async fn delete_status(
        Extension(services): Extension<AppServices>,
        Path(status_id): Path<Uuid>,
    ) -> AppResult<Json<StatusResponse>> {
        let status = services.statuses.delete_status(status_id).await?;

        Ok(Json(StatusResponse::from(status)))
    }
}
