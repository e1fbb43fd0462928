use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::database::user::{DynUserRepository, User};
use crate::server::error::AppResult;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait UserServiceTrait {
    async fn get_users(&self) -> AppResult<Vec<User>>;
    async fn get_user(&self, user_id: Uuid) -> AppResult<User>;
    async fn create_user(&self, name: String) -> AppResult<User>;
    async fn delete_user(&self, user_id: Uuid) -> AppResult<User>;
}

pub struct UserService {
    repository: DynUserRepository,
}

impl UserService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.repository.list().await
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.repository.get(user_id).await
    }

    async fn create_user(&self, name: String) -> AppResult<User> {
        let user = User::new(Uuid::new_v4(), name);
        let created = self.repository.save(user).await?;

        info!("created user {} ({})", created.name, created.id);
        Ok(created)
    }

    async fn delete_user(&self, user_id: Uuid) -> AppResult<User> {
        self.repository.delete(user_id).await
    }
}
