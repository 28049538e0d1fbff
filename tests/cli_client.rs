//! The `hotel-cli` client against a running server.

use reqwest::StatusCode;

use hotel_browser::catalog::Hotel;
use hotel_browser::client::{ClientError, HotelClient};
use hotel_browser::config::AppConfig;

mod common;

fn file_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.source.path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/hotels.json").to_string();
    config
}

#[tokio::test]
async fn test_list_and_show() {
    let (addr, shutdown) = common::start_server(file_config()).await;
    let client = HotelClient::new(&format!("http://{}/", addr));

    let expected: Vec<Hotel> = serde_json::from_str(common::SAMPLE_JSON).unwrap();
    assert_eq!(client.list().await.unwrap(), expected);
    assert_eq!(client.show(2).await.unwrap(), expected[1]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_error_statuses_are_errors() {
    let (addr, shutdown) = common::start_server(file_config()).await;
    let client = HotelClient::new(&format!("http://{}", addr));

    match client.show(99).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains("Hotel not found"));
        }
        other => panic!("expected a status error, got {:?}", other),
    }

    assert!(client.book(2).await.is_ok());
    assert!(matches!(
        client.book(99).await,
        Err(ClientError::Status { status: StatusCode::NOT_FOUND, .. })
    ));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unavailable_source_is_an_error() {
    let dead = common::closed_addr().await;
    let mut config = AppConfig::default();
    config.source.kind = hotel_browser::config::SourceKind::Http;
    config.source.url = Some(format!("http://{}/hotels.json", dead));
    config.source.preload = false;
    let (addr, shutdown) = common::start_server(config).await;

    let err = HotelClient::new(&format!("http://{}", addr)).list().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: StatusCode::BAD_GATEWAY, .. }));
    assert!(err.to_string().contains("Error loading hotels"));

    shutdown.trigger();
}
