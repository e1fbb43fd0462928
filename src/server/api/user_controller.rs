use axum::{
    Extension, Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;
use validator::Validate;

use crate::server::dtos::user_dto::{CreateFollowerRequest, CreateUserRequest, UserResponse};
use crate::server::error::{AppResult, Error};
use crate::server::extractors::UserIdentity;
use crate::server::services::app_services::AppServices;

pub struct UserController;

impl UserController {
    pub fn app() -> Router {
        Router::new()
            .route("/", get(Self::get_users).post(Self::create_user))
            .route("/{user_id}", get(Self::get_user).delete(Self::delete_user))
            .route(
                "/{user_id}/followers",
                get(Self::get_followers).post(Self::follow_user),
            )
            .route(
                "/{user_id}/followers/{follower_user_id}",
                delete(Self::unfollow_user),
            )
            .route("/{user_id}/followees", get(Self::get_followees))
    }

    async fn get_users(
        Extension(services): Extension<AppServices>,
    ) -> AppResult<Json<Vec<UserResponse>>> {
        let users = services.users.get_users().await?;

        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    async fn get_user(
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<UserResponse>> {
        let user = services.users.get_user(user_id).await?;

        Ok(Json(UserResponse::from(user)))
    }

    async fn create_user(
        Extension(services): Extension<AppServices>,
        Json(request): Json<CreateUserRequest>,
    ) -> AppResult<(StatusCode, Json<UserResponse>)> {
        request.validate()?;

        let user = services.users.create_user(request.username).await?;

        Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
    }

    /// only the user themselves may delete their account
    async fn delete_user(
        UserIdentity(caller): UserIdentity,
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<UserResponse>> {
        if caller != user_id {
            return Err(Error::Unauthorized);
        }

        let user = services.users.delete_user(user_id).await?;

        Ok(Json(UserResponse::from(user)))
    }

    async fn get_followers(
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<Vec<UserResponse>>> {
        let followers = services.followers.get_followers(user_id).await?;

        Ok(Json(followers.into_iter().map(UserResponse::from).collect()))
    }

    async fn get_followees(
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<Vec<UserResponse>>> {
        let followees = services.followers.get_followees(user_id).await?;

        Ok(Json(followees.into_iter().map(UserResponse::from).collect()))
    }

    /// the follower in the body must be the caller, following on someone
    /// else's behalf is not a thing
    async fn follow_user(
        UserIdentity(caller): UserIdentity,
        Extension(services): Extension<AppServices>,
        Path(user_id): Path<Uuid>,
        Json(request): Json<CreateFollowerRequest>,
    ) -> AppResult<Json<UserResponse>> {
        if caller != request.id {
            return Err(Error::Unauthorized);
        }

        let followee = services.followers.follow_user(user_id, request.id).await?;

        Ok(Json(UserResponse::from(followee)))
    }

    async fn unfollow_user(
        UserIdentity(caller): UserIdentity,
        Extension(services): Extension<AppServices>,
        Path((user_id, follower_user_id)): Path<(Uuid, Uuid)>,
    ) -> AppResult<StatusCode> {
        if caller != follower_user_id {
            return Err(Error::Unauthorized);
        }

        services
            .followers
            .unfollow_user(user_id, follower_user_id)
            .await?;

        Ok(StatusCode::OK)
    }
}
