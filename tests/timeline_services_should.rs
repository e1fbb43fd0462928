use std::sync::Arc;

use chirp::database::pubsub::MockEventPublisher;
use chirp::database::status::Status;
use chirp::database::timeline::{DynTimelineRepository, InMemoryTimelineRepo, TimelineRepository};
use chirp::database::user::{DynUserRepository, InMemoryUserRepo, User, UserRepository};
use chirp::server::error::Error;
use chirp::server::services::follower_services::{DynFollowerService, FollowerService};
use chirp::server::services::timeline_services::{TimelineService, TimelineServiceTrait};
use uuid::Uuid;

struct Fixture {
    timelines: DynTimelineRepository,
    service: TimelineService,
    author: User,
    followers: Vec<User>,
}

/// one author with `follower_count` followers and a fresh timeline service
async fn fixture(follower_count: usize, publisher: MockEventPublisher) -> Fixture {
    let users: DynUserRepository = Arc::new(InMemoryUserRepo::new());
    let timelines: DynTimelineRepository = Arc::new(InMemoryTimelineRepo::new());

    let mut author = User::new(Uuid::new_v4(), "Author".to_string());
    let mut followers = Vec::new();
    for i in 0..follower_count {
        let mut follower = User::new(Uuid::new_v4(), format!("Follower {}", i + 1));
        follower.followees.insert(author.id);
        author.followers.insert(follower.id);
        followers.push(users.save(follower).await.unwrap());
    }
    let author = users.save(author).await.unwrap();

    let follower_service: DynFollowerService = Arc::new(FollowerService::new(users));
    let service = TimelineService::new(
        timelines.clone(),
        follower_service,
        Arc::new(publisher),
        "timeline".to_string(),
    );

    Fixture {
        timelines,
        service,
        author,
        followers,
    }
}

fn accepting_publisher() -> MockEventPublisher {
    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|topic, _| topic == "timeline")
        .returning(|_, _| Ok(()));
    publisher
}

#[tokio::test]
async fn test_fan_out_appends_to_every_follower_exactly_once() {
    let fixture = fixture(3, accepting_publisher()).await;

    let status = Status {
        id: Uuid::new_v4(),
        content: "New Status".to_string(),
        user_id: fixture.author.id,
        media_ids: Vec::new(),
    };

    fixture
        .service
        .update_timelines(fixture.author.id, status.clone())
        .await
        .expect("fan-out should work");

    for follower in &fixture.followers {
        let timeline = fixture.timelines.get(follower.id).await.unwrap();
        let occurrences = timeline
            .statuses
            .iter()
            .filter(|s| s.id == status.id)
            .count();
        assert_eq!(occurrences, 1, "follower {} got {} copies", follower.name, occurrences);
    }

    // the author doesn't follow themselves, no timeline appears for them
    assert!(matches!(
        fixture.timelines.get(fixture.author.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_fan_out_appends_to_existing_timelines() {
    let fixture = fixture(1, accepting_publisher()).await;

    let first = Status {
        id: Uuid::new_v4(),
        content: "first".to_string(),
        user_id: fixture.author.id,
        media_ids: Vec::new(),
    };
    let second = Status {
        id: Uuid::new_v4(),
        content: "second".to_string(),
        user_id: fixture.author.id,
        media_ids: Vec::new(),
    };

    fixture
        .service
        .update_timelines(fixture.author.id, first.clone())
        .await
        .unwrap();
    fixture
        .service
        .update_timelines(fixture.author.id, second.clone())
        .await
        .unwrap();

    let timeline = fixture.timelines.get(fixture.followers[0].id).await.unwrap();

    assert_eq!(timeline.statuses.len(), 2);
    assert_eq!(timeline.statuses[0].id, first.id);
    assert_eq!(timeline.statuses[1].id, second.id);
}

#[tokio::test]
async fn test_fan_out_publishes_timeline_event() {
    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .withf(|topic, payload| topic == "timeline" && payload.contains("\"timelinesUpdated\":2"))
        .returning(|_, _| Ok(()));

    let fixture = fixture(2, publisher).await;

    let status = Status {
        id: Uuid::new_v4(),
        content: "announced".to_string(),
        user_id: fixture.author.id,
        media_ids: Vec::new(),
    };

    fixture
        .service
        .update_timelines(fixture.author.id, status)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fan_out_for_unknown_author_is_not_found() {
    let fixture = fixture(0, MockEventPublisher::new()).await;

    let stranger = Uuid::new_v4();
    let status = Status {
        id: Uuid::new_v4(),
        content: "ghost".to_string(),
        user_id: stranger,
        media_ids: Vec::new(),
    };

    let result = fixture.service.update_timelines(stranger, status).await;

    assert!(matches!(result, Err(Error::NotFound(id)) if id == stranger));
}
