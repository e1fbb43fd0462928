use chrono::{DateTime, Utc};
use serde::Serialize;

/// body of every non-2xx response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub method: String,
    pub path: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// handed from Error::into_response to the envelope middleware through the
/// response extensions
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);
