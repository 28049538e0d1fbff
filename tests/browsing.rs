//! End-to-end browsing against a file-backed catalog.

use hotel_browser::catalog::Hotel;
use hotel_browser::config::AppConfig;

mod common;

fn file_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.source.path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/hotels.json").to_string();
    config
}

#[tokio::test]
async fn test_root_redirects_to_list() {
    let (addr, shutdown) = common::start_server(file_config()).await;

    let res = common::client().get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 303);
    assert_eq!(res.headers()["location"], "/hotels");

    shutdown.trigger();
}

#[tokio::test]
async fn test_list_and_detail_pages() {
    let (addr, shutdown) = common::start_server(file_config()).await;
    let client = common::client();

    let res = client.get(format!("http://{}/hotels", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("Luxury Hotel"));
    assert!(html.contains("Budget Inn"));
    assert!(html.contains("Price: $299"));
    assert_eq!(html.matches("Book Now").count(), 2);

    let res = client.get(format!("http://{}/hotels/2", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("<h2>Budget Inn</h2>"));
    assert!(html.contains("Location: Los Angeles"));

    let res = client.get(format!("http://{}/hotels/abc", addr)).send().await.unwrap();
    assert_eq!(res.status(), 400);
    assert!(res.text().await.unwrap().contains("Error loading hotel details"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_json_api_matches_source() {
    let (addr, shutdown) = common::start_server(file_config()).await;
    let client = common::client();

    let expected: Vec<Hotel> = serde_json::from_str(common::SAMPLE_JSON).unwrap();

    let res = client.get(format!("http://{}/api/hotels", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let hotels: Vec<Hotel> = res.json().await.unwrap();
    assert_eq!(hotels, expected);

    for hotel in &expected {
        let res = client
            .get(format!("http://{}/api/hotels/{}", addr, hotel.id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(&res.json::<Hotel>().await.unwrap(), hotel);
    }

    let res = client.get(format!("http://{}/api/hotels/99", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_booking_is_a_notice_only() {
    let (addr, shutdown) = common::start_server(file_config()).await;
    let client = common::client();

    let res = client.post(format!("http://{}/hotels/2/book", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("You have booked Budget Inn!"));

    let res = client.get(format!("http://{}/api/hotels", addr)).send().await.unwrap();
    assert_eq!(res.json::<Vec<Hotel>>().await.unwrap().len(), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (addr, shutdown) = common::start_server(file_config()).await;

    let res = common::client()
        .get(format!("http://{}/health", addr))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["x-request-id"], "trace-me");
    assert_eq!(res.text().await.unwrap(), "ok");

    shutdown.trigger();
}
