//! The hotel store: sole owner of the loaded catalog.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::catalog::source::DataSource;
use crate::catalog::types::{Hotel, HotelId, StoreError, StoreResult};
use crate::observability::metrics;

/// An immutable, validated hotel collection in source order.
#[derive(Debug)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    index: HashMap<HotelId, usize>,
}

impl Catalog {
    /// Validate records and build the id index.
    ///
    /// Fails on the first record that breaks an invariant, including duplicate ids.
    pub fn build(origin: &str, hotels: Vec<Hotel>) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(hotels.len());
        for (pos, hotel) in hotels.iter().enumerate() {
            hotel.check().map_err(|reason| StoreError::Malformed {
                origin: origin.to_string(),
                reason,
            })?;
            if index.insert(hotel.id, pos).is_some() {
                return Err(StoreError::Malformed {
                    origin: origin.to_string(),
                    reason: format!("duplicate hotel id {}", hotel.id),
                });
            }
        }
        Ok(Self { hotels, index })
    }

    /// All hotels in source order.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Look up a hotel by id.
    pub fn get(&self, id: HotelId) -> Option<&Hotel> {
        self.index.get(&id).map(|&pos| &self.hotels[pos])
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

/// Shared handle to the loaded catalog.
pub type Snapshot = Arc<Catalog>;

/// Loads the catalog once and serves list and by-id lookups from it.
///
/// The first successful load is kept for the lifetime of the store, so every
/// later call sees the same snapshot. A failed load is not remembered: the
/// next caller triggers a fresh attempt.
#[derive(Debug)]
pub struct HotelStore {
    source: DataSource,
    client: reqwest::Client,
    snapshot: OnceCell<Snapshot>,
}

impl HotelStore {
    /// Create a store with a default HTTP client.
    pub fn new(source: DataSource) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    /// Create a store whose HTTP fetches time out after `fetch_timeout`.
    pub fn with_timeout(source: DataSource, fetch_timeout: Duration) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| StoreError::SourceUnavailable {
                origin: source.to_string(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self::with_client(source, client))
    }

    pub fn with_client(source: DataSource, client: reqwest::Client) -> Self {
        Self {
            source,
            client,
            snapshot: OnceCell::new(),
        }
    }

    /// The configured data source.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// True once a snapshot has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.initialized()
    }

    /// Return every hotel, loading the catalog on first use.
    pub async fn list_all(&self) -> StoreResult<Snapshot> {
        let snapshot = self
            .snapshot
            .get_or_try_init(|| self.load())
            .await?;
        Ok(snapshot.clone())
    }

    /// Return the hotel with the given id.
    pub async fn get_by_id(&self, id: HotelId) -> StoreResult<Hotel> {
        let snapshot = self.list_all().await?;
        snapshot.get(id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Load eagerly, logging instead of failing.
    pub async fn preload(&self) {
        match self.list_all().await {
            Ok(snapshot) => {
                tracing::info!(count = snapshot.len(), origin = %self.source, "Hotel catalog preloaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Hotel catalog preload failed; will retry on first request");
            }
        }
    }

    async fn load(&self) -> StoreResult<Snapshot> {
        let origin = self.source.to_string();
        tracing::debug!(origin = %origin, "Loading hotel catalog");

        let result = self
            .source
            .fetch(&self.client)
            .await
            .and_then(|hotels| Catalog::build(&origin, hotels));

        match result {
            Ok(catalog) => {
                metrics::record_catalog_load(true, catalog.len());
                tracing::info!(origin = %origin, count = catalog.len(), "Hotel catalog loaded");
                Ok(Arc::new(catalog))
            }
            Err(e) => {
                metrics::record_catalog_load(false, 0);
                tracing::error!(origin = %origin, error = %e, "Failed to load hotel catalog");
                Err(e)
            }
        }
    }
}
