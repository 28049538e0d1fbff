//! Hotel catalog subsystem.
//!
//! # Data Flow
//! ```text
//! DataSource (file / HTTP / inline)
//!     → source.rs (fetch + JSON decode)
//!     → store.rs (validate, index by id, freeze as Snapshot)
//!     → shared via Arc<HotelStore> to every view
//! ```
//!
//! # Design Decisions
//! - Loaded once; the snapshot is immutable and shared without locks
//! - Failed loads are surfaced to the caller and retried on the next call
//! - By-id lookup is served from the loaded list, not a per-id endpoint

pub mod source;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use source::DataSource;
pub use store::{Catalog, HotelStore, Snapshot};
pub use types::{Hotel, HotelId, StoreError, StoreResult};
