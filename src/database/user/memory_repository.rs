use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::database::user::model::{User, UserRepository};
use crate::server::error::{AppResult, Error};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, user_id: Uuid) -> AppResult<User> {
        let users = self.users.lock().unwrap();
        users.get(&user_id).cloned().ok_or(Error::NotFound(user_id))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        users.remove(&user_id).ok_or(Error::NotFound(user_id))
    }
}
