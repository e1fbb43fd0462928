use std::sync::Arc;

use chirp::database::user::{DynUserRepository, InMemoryUserRepo};
use chirp::server::error::Error;
use chirp::server::services::user_services::{UserService, UserServiceTrait};
use uuid::Uuid;

#[tokio::test]
async fn test_new_users_start_without_edges() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let service = UserService::new(repo);

    let user = service.create_user("alice".to_string()).await.unwrap();
    let fetched = service.get_user(user.id).await.unwrap();

    assert_eq!(fetched.name, "alice");
    assert!(fetched.followers.is_empty());
    assert!(fetched.followees.is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_is_not_found() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let service = UserService::new(repo);

    let missing = Uuid::new_v4();
    let result = service.delete_user(missing).await;

    assert!(matches!(result, Err(Error::NotFound(id)) if id == missing));
}

#[tokio::test]
async fn test_deleted_users_are_gone() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let service = UserService::new(repo);

    let user = service.create_user("bob".to_string()).await.unwrap();
    service.delete_user(user.id).await.unwrap();

    assert!(matches!(
        service.get_user(user.id).await,
        Err(Error::NotFound(_))
    ));
}
