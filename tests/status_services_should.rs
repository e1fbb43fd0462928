use std::sync::Arc;

use chirp::database::pubsub::MockEventPublisher;
use chirp::database::status::{DynStatusRepository, InMemoryStatusRepo, Status};
use chirp::server::error::Error;
use chirp::server::services::status_services::{StatusService, StatusServiceTrait};
use uuid::Uuid;

fn new_status(user_id: Uuid, content: &str) -> Status {
    Status {
        id: Uuid::new_v4(),
        content: content.to_string(),
        user_id,
        media_ids: Vec::new(),
    }
}

fn accepting_publisher(topic: &'static str) -> MockEventPublisher {
    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(move |t, _| t == topic)
        .returning(|_, _| Ok(()));
    publisher
}

#[tokio::test]
async fn test_create_then_get_returns_same_status() {
    let repo: DynStatusRepository = Arc::new(InMemoryStatusRepo::new());
    let service = StatusService::new(
        repo,
        Arc::new(accepting_publisher("status")),
        "status".to_string(),
    );

    let status = new_status(Uuid::new_v4(), "hello world");
    let created = service.create_status(status.clone()).await.unwrap();
    let fetched = service.get_status(created.id).await.unwrap();

    assert_eq!(fetched, status);
}

#[tokio::test]
async fn test_create_publishes_exactly_once() {
    let repo: DynStatusRepository = Arc::new(InMemoryStatusRepo::new());

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .withf(|topic, payload| topic == "status" && payload.contains("hello"))
        .returning(|_, _| Ok(()));

    let service = StatusService::new(repo, Arc::new(publisher), "status".to_string());

    service
        .create_status(new_status(Uuid::new_v4(), "hello"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_nonexistent_is_not_found() {
    let repo: DynStatusRepository = Arc::new(InMemoryStatusRepo::new());
    let service = StatusService::new(
        repo,
        Arc::new(MockEventPublisher::new()),
        "status".to_string(),
    );

    let missing = Uuid::new_v4();
    let result = service.delete_status(missing).await;

    assert!(matches!(result, Err(Error::NotFound(id)) if id == missing));
}

#[tokio::test]
async fn test_list_filters_by_user() {
    let repo: DynStatusRepository = Arc::new(InMemoryStatusRepo::new());
    let service = StatusService::new(
        repo,
        Arc::new(accepting_publisher("status")),
        "status".to_string(),
    );

    let author = Uuid::new_v4();
    let other = Uuid::new_v4();

    service.create_status(new_status(author, "one")).await.unwrap();
    service.create_status(new_status(author, "two")).await.unwrap();
    service.create_status(new_status(other, "three")).await.unwrap();

    let filtered = service.get_statuses(Some(author)).await.unwrap();
    let all = service.get_statuses(None).await.unwrap();

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|s| s.user_id == author));
    assert_eq!(all.len(), 3);
}
