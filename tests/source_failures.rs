//! Catalog source failure handling over HTTP.

use axum::http::StatusCode;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

use hotel_browser::config::{AppConfig, SourceKind};

mod common;

fn http_config(url: String, preload: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.source.kind = SourceKind::Http;
    config.source.url = Some(url);
    config.source.preload = preload;
    config.source.fetch_timeout_secs = 2;
    config
}

#[tokio::test]
async fn test_http_source_is_loaded_once() {
    let (backend, hits) = common::start_catalog_backend(StatusCode::OK, common::SAMPLE_JSON).await;
    let config = http_config(format!("http://{}/hotels.json", backend), true);
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();

    for path in ["/hotels", "/hotels/1", "/api/hotels", "/hotels/2"] {
        let res = client.get(format!("http://{}{}", addr, path)).send().await.unwrap();
        assert_eq!(res.status(), 200, "GET {} failed", path);
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1, "snapshot should be fetched once");

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_first_requests_share_one_load() {
    let (backend, hits) =
        common::start_slow_catalog_backend(Duration::from_millis(200), StatusCode::OK, common::SAMPLE_JSON)
            .await;
    let config = http_config(format!("http://{}/hotels.json", backend), false);
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();

    let mut requests = JoinSet::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = format!("http://{}/hotels", addr);
        requests.spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (res.status(), res.text().await.unwrap())
        });
    }

    while let Some(joined) = requests.join_next().await {
        let (status, html) = joined.unwrap();
        assert_eq!(status, 200);
        assert!(html.contains("Budget Inn"));
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1, "concurrent activations should wait on one load");

    shutdown.trigger();
}

#[tokio::test]
async fn test_hung_source_times_out() {
    let (backend, _) =
        common::start_slow_catalog_backend(Duration::from_secs(30), StatusCode::OK, common::SAMPLE_JSON).await;
    let mut config = http_config(format!("http://{}/hotels.json", backend), false);
    config.source.fetch_timeout_secs = 1;
    let (addr, shutdown) = common::start_server(config).await;

    let started = Instant::now();
    let res = common::client().get(format!("http://{}/hotels", addr)).send().await.unwrap();
    assert_eq!(res.status(), 502);
    assert!(res.text().await.unwrap().contains("Error loading hotels"));
    assert!(started.elapsed() < Duration::from_secs(5), "fetch should give up after its timeout");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_source_shows_error() {
    let dead = common::closed_addr().await;
    let config = http_config(format!("http://{}/hotels.json", dead), false);
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();

    let res = client.get(format!("http://{}/hotels", addr)).send().await.unwrap();
    assert_eq!(res.status(), 502);
    let html = res.text().await.unwrap();
    assert!(html.contains("Error loading hotels"));
    assert!(!html.contains("Book Now"));

    let res = client.get(format!("http://{}/hotels/1", addr)).send().await.unwrap();
    assert_eq!(res.status(), 502);
    assert!(res.text().await.unwrap().contains("Error loading hotel details"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_server_error_status_is_unavailable() {
    let (backend, hits) =
        common::start_catalog_backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let config = http_config(format!("http://{}/hotels.json", backend), false);
    let (addr, shutdown) = common::start_server(config).await;
    let client = common::client();

    for _ in 0..2 {
        let res = client.get(format!("http://{}/api/hotels", addr)).send().await.unwrap();
        assert_eq!(res.status(), 502);
    }

    assert_eq!(hits.load(Ordering::SeqCst), 2, "failed loads are retried on the next request");

    shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_payload_shows_error() {
    let (backend, _) = common::start_catalog_backend(StatusCode::OK, r#"{"hotels": []}"#).await;
    let config = http_config(format!("http://{}/hotels.json", backend), false);
    let (addr, shutdown) = common::start_server(config).await;

    let res = common::client().get(format!("http://{}/hotels", addr)).send().await.unwrap();
    assert_eq!(res.status(), 502);
    assert!(res.text().await.unwrap().contains("Error loading hotels"));

    shutdown.trigger();
}
