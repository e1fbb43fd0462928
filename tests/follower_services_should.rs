use std::sync::Arc;

use chirp::database::user::{DynUserRepository, InMemoryUserRepo, User, UserRepository};
use chirp::server::error::Error;
use chirp::server::services::follower_services::{FollowerService, FollowerServiceTrait};
use uuid::Uuid;

async fn seed_users(repo: &DynUserRepository, count: usize) -> Vec<User> {
    let mut users = Vec::new();
    for i in 0..count {
        let user = User::new(Uuid::new_v4(), format!("User {}", i + 1));
        users.push(repo.save(user).await.unwrap());
    }
    users
}

#[tokio::test]
async fn test_follow_is_symmetric() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 2).await;
    let service = FollowerService::new(repo.clone());

    service
        .follow_user(users[0].id, users[1].id)
        .await
        .expect("follow should work");

    let followee = repo.get(users[0].id).await.unwrap();
    let follower = repo.get(users[1].id).await.unwrap();

    assert!(followee.followers.contains(&users[1].id));
    assert!(follower.followees.contains(&users[0].id));
}

#[tokio::test]
async fn test_unfollow_removes_both_sides() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 2).await;
    let service = FollowerService::new(repo.clone());

    service.follow_user(users[0].id, users[1].id).await.unwrap();
    service
        .unfollow_user(users[0].id, users[1].id)
        .await
        .expect("unfollow should work");

    let followee = repo.get(users[0].id).await.unwrap();
    let follower = repo.get(users[1].id).await.unwrap();

    assert!(followee.followers.is_empty());
    assert!(follower.followees.is_empty());
}

#[tokio::test]
async fn test_self_follow_is_rejected() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 1).await;
    let service = FollowerService::new(repo);

    let result = service.follow_user(users[0].id, users[0].id).await;

    assert!(matches!(result, Err(Error::SelfFollow)));
}

#[tokio::test]
async fn test_unfollow_without_edge_is_not_found() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 2).await;
    let service = FollowerService::new(repo);

    // never followed in the first place
    let result = service.unfollow_user(users[0].id, users[1].id).await;

    assert!(matches!(result, Err(Error::NotFound(id)) if id == users[1].id));
}

#[tokio::test]
async fn test_get_followers_resolves_users() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 3).await;
    let service = FollowerService::new(repo);

    service.follow_user(users[0].id, users[1].id).await.unwrap();
    service.follow_user(users[0].id, users[2].id).await.unwrap();

    let followers = service.get_followers(users[0].id).await.unwrap();

    assert_eq!(followers.len(), 2);
    assert!(followers.iter().any(|u| u.name == "User 2"));
    assert!(followers.iter().any(|u| u.name == "User 3"));
}

#[tokio::test]
async fn test_follow_unknown_user_is_not_found() {
    let repo: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let users = seed_users(&repo, 1).await;
    let service = FollowerService::new(repo);

    let stranger = Uuid::new_v4();
    let result = service.follow_user(stranger, users[0].id).await;

    assert!(matches!(result, Err(Error::NotFound(id)) if id == stranger));
}
