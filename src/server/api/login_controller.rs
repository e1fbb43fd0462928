use axum::{Extension, Json, Router, routing::post};
use tracing::info;

use crate::server::dtos::login_dto::{LoginRequest, LoginResponse};
use crate::server::error::{AppResult, Error};
use crate::server::services::app_services::AppServices;

pub struct LoginController;

impl LoginController {
    pub fn app() -> Router {
        Router::new().route("/login", post(Self::login))
    }

    /// demo grade login: knowing a user's name and id is the credential.
    /// a wrong name gets the same 401 as an unknown id.
    async fn login(
        Extension(services): Extension<AppServices>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<Json<LoginResponse>> {
        let user = services
            .users
            .get_user(request.id)
            .await
            .map_err(|_| Error::Unauthorized)?;

        if user.name != request.username {
            return Err(Error::Unauthorized);
        }

        let access_token = services.token_util.issue(user.id)?;

        info!("issued access token for {}", user.id);
        Ok(Json(LoginResponse { access_token }))
    }
}
