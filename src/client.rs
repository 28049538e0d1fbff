//! HTTP client for a running hotel browser.
//!
//! Used by `hotel-cli`. Every non-success status is an error, so callers
//! never mistake an error body for data.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::{Hotel, HotelId};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Talks to the JSON data API and the booking action.
pub struct HotelClient {
    client: Client,
    base_url: String,
}

impl HotelClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /api/hotels
    pub async fn list(&self) -> ClientResult<Vec<Hotel>> {
        let res = self
            .client
            .get(format!("{}/api/hotels", self.base_url))
            .send()
            .await?;
        read_json(res).await
    }

    /// GET /api/hotels/{id}
    pub async fn show(&self, id: HotelId) -> ClientResult<Hotel> {
        let res = self
            .client
            .get(format!("{}/api/hotels/{}", self.base_url, id))
            .send()
            .await?;
        read_json(res).await
    }

    /// POST /hotels/{id}/book. The server only acknowledges; nothing is stored.
    pub async fn book(&self, id: HotelId) -> ClientResult<()> {
        let res = self
            .client
            .post(format!("{}/hotels/{}/book", self.base_url, id))
            .send()
            .await?;
        check_status(res).await.map(|_| ())
    }
}

async fn check_status(res: Response) -> ClientResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(res: Response) -> ClientResult<T> {
    Ok(check_status(res).await?.json().await?)
}
