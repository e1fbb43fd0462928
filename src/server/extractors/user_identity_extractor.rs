use axum::Extension;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;
use uuid::Uuid;

use crate::server::error::Error;
use crate::server::services::app_services::AppServices;

/// who is making the request. a verified bearer token wins, the bare x-user
/// header is accepted as a fallback for service-to-service calls.
pub struct UserIdentity(pub Uuid);

impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(services): Extension<AppServices> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|err| Error::InternalServerErrorWithContext(err.to_string()))?;

        if let Some(token) = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            let claims = services.token_util.verify(token)?;
            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| Error::Unauthorized)?;
            debug!("authenticated {} via bearer token", user_id);
            return Ok(UserIdentity(user_id));
        }

        let user_id = parts
            .headers
            .get("x-user")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(Error::Unauthorized)?;

        Ok(UserIdentity(user_id))
    }
}
