//! Backing data sources for the hotel catalog.
//!
//! # Responsibilities
//! - Fetch the raw hotel list from disk, over HTTP, or from memory
//! - Map transport failures to `SourceUnavailable`
//! - Map decode failures to `Malformed`

use std::fmt;
use std::path::PathBuf;
use url::Url;

use crate::catalog::types::{Hotel, StoreError, StoreResult};

/// Where the hotel list comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// JSON array stored in a local file.
    File(PathBuf),
    /// JSON array served by an HTTP endpoint.
    Http(Url),
    /// Records held in memory.
    Inline(Vec<Hotel>),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "file:{}", path.display()),
            DataSource::Http(url) => write!(f, "{}", url),
            DataSource::Inline(hotels) => write!(f, "inline({} hotels)", hotels.len()),
        }
    }
}

impl DataSource {
    /// Fetch the raw hotel list. Records are not yet validated.
    pub async fn fetch(&self, client: &reqwest::Client) -> StoreResult<Vec<Hotel>> {
        let origin = self.to_string();
        match self {
            DataSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| unavailable(&origin, e))?;
                decode(&origin, &bytes)
            }
            DataSource::Http(url) => {
                let response = client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| unavailable(&origin, e))?
                    .error_for_status()
                    .map_err(|e| unavailable(&origin, e))?;
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| unavailable(&origin, e))?;
                decode(&origin, &bytes)
            }
            DataSource::Inline(hotels) => Ok(hotels.clone()),
        }
    }
}

fn unavailable(origin: &str, reason: impl fmt::Display) -> StoreError {
    StoreError::SourceUnavailable {
        origin: origin.to_string(),
        reason: reason.to_string(),
    }
}

fn decode(origin: &str, bytes: &[u8]) -> StoreResult<Vec<Hotel>> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Malformed {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}
