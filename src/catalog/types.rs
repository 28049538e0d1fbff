//! Hotel record and catalog error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hotel identifier. Always positive within a loaded catalog.
pub type HotelId = u64;

/// A single bookable hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique, positive identifier.
    pub id: HotelId,
    /// Display name (never blank).
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// URL of the hotel image.
    #[serde(default)]
    pub image: String,
    /// Nightly price, currency implicit.
    pub price: f64,
    /// City or area.
    #[serde(default)]
    pub location: String,
}

impl Hotel {
    /// Check the per-record invariants. Uniqueness is checked by the loader.
    pub fn check(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err(format!("hotel '{}' has id 0", self.name));
        }
        if self.name.trim().is_empty() {
            return Err(format!("hotel {} has an empty name", self.id));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("hotel {} has invalid price {}", self.id, self.price));
        }
        Ok(())
    }
}

/// Errors returned by the hotel store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing data could not be fetched or read.
    #[error("hotel source {origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// The data was fetched but is not a valid hotel list.
    #[error("hotel source {origin} is malformed: {reason}")]
    Malformed { origin: String, reason: String },

    /// No hotel with the requested id exists.
    #[error("hotel {0} not found")]
    NotFound(HotelId),
}

impl StoreError {
    /// True for errors caused by loading the catalog rather than by lookup.
    pub fn is_load_failure(&self) -> bool {
        !matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
