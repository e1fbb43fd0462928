use axum::{
    Extension, Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::server::dtos::media_dto::MediaUploadResponse;
use crate::server::error::{AppResult, Error};
use crate::server::services::app_services::AppServices;
use crate::server::utils::media_format_utils::MediaFormat;

/// multipart uploads above this are rejected outright
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub struct MediaController;

impl MediaController {
    pub fn app() -> Router {
        Router::new()
            .route("/", post(Self::upload_media))
            .route("/{media_id}", get(Self::download_media))
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
    }

    async fn upload_media(
        Extension(services): Extension<AppServices>,
        mut multipart: Multipart,
    ) -> AppResult<Json<MediaUploadResponse>> {
        let mut data = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| Error::BadRequest(e.to_string()))?
        {
            if field.name() == Some("media") {
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| Error::BadRequest(e.to_string()))?,
                );
                break;
            }
        }

        let data = data.ok_or_else(|| Error::BadRequest("missing media form field".to_string()))?;

        let format = MediaFormat::sniff(&data)
            .ok_or_else(|| Error::BadRequest("content type not allowed".to_string()))?;

        let media_id = services.media.upload(format, data.to_vec()).await?;

        Ok(Json(MediaUploadResponse { media_id }))
    }

    /// redirects to a presigned url instead of proxying the bytes
    async fn download_media(
        Extension(services): Extension<AppServices>,
        Path(media_id): Path<String>,
    ) -> AppResult<Response> {
        let url = services.media.download_url(&media_id).await?;

        Ok((StatusCode::SEE_OTHER, [(header::LOCATION, url)]).into_response())
    }
}
