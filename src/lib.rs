//! Hotel Browser Library
//!
//! Server-rendered hotel list and detail pages over a once-loaded JSON
//! catalog, plus a small JSON data API.

// Core
pub mod catalog;
pub mod routing;
pub mod views;

// Serving
pub mod client;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use catalog::{DataSource, Hotel, HotelStore, StoreError};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
