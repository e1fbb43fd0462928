use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use crate::server::dtos::error_dto::ErrorMessage;

pub type AppResult<T> = Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// carries the id so clients can tell which entity was missing
    #[error("entity with uuid {{{0}}} not found")]
    NotFound(Uuid),

    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("cant follow one self")]
    SelfFollow,

    #[error("unrecognized format")]
    UnrecognizedFormat,

    #[error("{0}")]
    InternalServerErrorWithContext(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) | Error::SelfFollow | Error::UnrecognizedFormat => {
                StatusCode::BAD_REQUEST
            }
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::InternalServerErrorWithContext(_) | Error::Anyhow(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<redis::RedisError> for Error {
    fn from(e: redis::RedisError) -> Self {
        Error::InternalServerErrorWithContext(format!("redis error: {}", e))
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Error::InternalServerErrorWithContext(format!("database error: {}", e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InternalServerErrorWithContext(format!("serialization error: {}", e))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(e: validator::ValidationErrors) -> Self {
        Error::BadRequest(e.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!("error while serving http route: {} ({})", message, status);
        } else {
            info!("error while serving http route: {} ({})", message, status);
        }

        // the envelope middleware picks the message up from the extension and
        // wraps it with method/path/timestamp, see server::mod
        let mut response = (status, Json(serde_json::json!({ "message": message }))).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}
