use std::sync::Arc;

use chirp::config::AppConfig;
use chirp::database::media_store::MockMediaStore;
use chirp::server::error::Error;
use chirp::server::services::conversion_services::{ConversionService, ConversionServiceTrait};

fn service_with_untouchable_store(tmp_dir: &str) -> ConversionService {
    // no expectations set, any store call makes the test fail
    let store = MockMediaStore::new();
    let config = AppConfig {
        media_tmp_dir: tmp_dir.to_string(),
        ..AppConfig::default()
    };
    ConversionService::new(Arc::new(store), reqwest::Client::new(), Arc::new(config))
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected_without_upload() {
    let tmp = tempfile::tempdir().unwrap();
    let service = service_with_untouchable_store(tmp.path().to_str().unwrap());

    let result = service.convert("a22e7ac7-d975-4361-aedf-7547fc978746.txt").await;

    assert!(matches!(result, Err(Error::UnrecognizedFormat)));
}

#[tokio::test]
async fn test_key_without_extension_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let service = service_with_untouchable_store(tmp.path().to_str().unwrap());

    let result = service.convert("a22e7ac7-d975-4361-aedf-7547fc978746").await;

    assert!(matches!(result, Err(Error::UnrecognizedFormat)));
}
