use std::sync::Arc;

use chirp::database::media_store::MockMediaStore;
use chirp::database::pubsub::MockEventPublisher;
use chirp::server::services::media_services::{MediaService, MediaServiceTrait};
use chirp::server::utils::media_format_utils::{MediaFormat, split_media_key};
use uuid::Uuid;

#[tokio::test]
async fn test_upload_stores_and_announces_under_uuid_key() {
    let mut store = MockMediaStore::new();
    store
        .expect_create()
        .times(1)
        .withf(|key, data| key.ends_with(".png") && data == b"fake png bytes")
        .returning(|_, _| Ok(()));

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .withf(|topic, payload| topic == "media" && payload.contains("mediaId"))
        .returning(|_, _| Ok(()));

    let service = MediaService::new(Arc::new(store), Arc::new(publisher), "media".to_string());

    let media_id = service
        .upload(MediaFormat::Png, b"fake png bytes".to_vec())
        .await
        .expect("upload should work");

    let (id, extension) = split_media_key(&media_id).expect("key should split");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(extension, "png");
}

#[tokio::test]
async fn test_download_url_presigns_the_object() {
    let mut store = MockMediaStore::new();
    store
        .expect_presign_get()
        .times(1)
        .withf(|key, _| key == "abc.webp")
        .returning(|_, _| Ok("http://signed.example/abc.webp".to_string()));

    let service = MediaService::new(
        Arc::new(store),
        Arc::new(MockEventPublisher::new()),
        "media".to_string(),
    );

    let url = service.download_url("abc.webp").await.unwrap();

    assert_eq!(url, "http://signed.example/abc.webp");
}
