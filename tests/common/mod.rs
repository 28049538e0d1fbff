//! Shared utilities for integration tests.

use axum::{http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use hotel_browser::config::AppConfig;
use hotel_browser::http::HttpServer;
use hotel_browser::lifecycle::Shutdown;

pub const SAMPLE_JSON: &str = r#"[
  {"id": 1, "name": "Luxury Hotel", "description": "Five-star hotel with amazing views.",
   "image": "https://via.placeholder.com/200", "price": 299, "location": "New York"},
  {"id": 2, "name": "Budget Inn", "description": "Affordable and comfortable stay.",
   "image": "https://via.placeholder.com/200", "price": 99, "location": "Los Angeles"}
]"#;

/// Start the hotel browser on an ephemeral port.
pub async fn start_server(mut config: AppConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).expect("server should build");
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Start a mock catalog endpoint serving `body` at `/hotels.json`.
///
/// Returns its address and a counter of requests served.
#[allow(dead_code)]
pub async fn start_catalog_backend(status: StatusCode, body: &'static str) -> (SocketAddr, Arc<AtomicU32>) {
    start_slow_catalog_backend(Duration::ZERO, status, body).await
}

/// Like [`start_catalog_backend`], but each response is held back for `delay`.
///
/// The counter is bumped when a request arrives, before the delay.
#[allow(dead_code)]
pub async fn start_slow_catalog_backend(
    delay: Duration,
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, Arc<AtomicU32>) {
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/hotels.json",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, hits)
}

/// A client that does not follow redirects.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// A local address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
