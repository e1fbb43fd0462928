use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::database::status::model::{Status, StatusRepository};
use crate::server::error::{AppResult, Error};

/// map backed repository, handy for tests and for running without redis
#[derive(Default)]
pub struct InMemoryStatusRepo {
    statuses: Mutex<HashMap<Uuid, Status>>,
}

impl InMemoryStatusRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StatusRepository for InMemoryStatusRepo {
    async fn list(&self) -> AppResult<Vec<Status>> {
        let statuses = self.statuses.lock().unwrap();
        Ok(statuses.values().cloned().collect())
    }

    async fn get(&self, status_id: Uuid) -> AppResult<Status> {
        let statuses = self.statuses.lock().unwrap();
        statuses
            .get(&status_id)
            .cloned()
            .ok_or(Error::NotFound(status_id))
    }

    async fn create(&self, status: Status) -> AppResult<Status> {
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.contains_key(&status.id) {
            return Err(Error::BadRequest("duplicated status".to_string()));
        }
        statuses.insert(status.id, status.clone());
        Ok(status)
    }

    async fn delete(&self, status_id: Uuid) -> AppResult<Status> {
        let mut statuses = self.statuses.lock().unwrap();
        statuses.remove(&status_id).ok_or(Error::NotFound(status_id))
    }
}
